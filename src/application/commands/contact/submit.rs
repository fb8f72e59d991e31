use super::{ContactCommandService, PRODUCT_INQUIRY_SUBJECT_PREFIX};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::contact::ContactEnvelope,
    },
    domain::{contact::ContactMessage, errors::DomainError},
};

pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Slug of the product the inquiry is about, if sent from a detail page.
    pub product: Option<String>,
}

impl ContactCommandService {
    pub async fn submit(&self, command: SubmitContactCommand) -> ApplicationResult<()> {
        let message = ContactMessage::new(
            &command.name,
            &command.email,
            command.phone.as_deref(),
            &command.message,
        )
        .map_err(|err| match err {
            DomainError::Validation(msg) => ApplicationError::validation(msg),
            other => ApplicationError::from(other),
        })?;

        let envelope = self.envelope_for(command.product.as_deref()).await?;

        self.forwarder
            .forward(&message, &envelope)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "contact relay failed");
                ApplicationError::upstream(err.to_string())
            })?;

        tracing::info!(email = %message.email, subject = %envelope.subject, "contact submission relayed");
        Ok(())
    }

    async fn envelope_for(&self, product: Option<&str>) -> ApplicationResult<ContactEnvelope> {
        let Some(slug) = product.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(self.envelope.clone());
        };

        let product = self
            .products
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no product with slug {slug:?}")))?;

        Ok(ContactEnvelope {
            subject: format!("{PRODUCT_INQUIRY_SUBJECT_PREFIX}{}", product.title),
            recipient: self.envelope.recipient.clone(),
        })
    }
}
