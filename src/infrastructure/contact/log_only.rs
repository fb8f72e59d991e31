use crate::application::ports::contact::{ContactEnvelope, ContactForwarder, ContactRelayError};
use crate::domain::contact::ContactMessage;
use async_trait::async_trait;

/// Used when no relay endpoint is configured: submissions are logged and
/// acknowledged.
#[derive(Debug, Default, Clone)]
pub struct LogOnlyForwarder;

#[async_trait]
impl ContactForwarder for LogOnlyForwarder {
    async fn forward(
        &self,
        message: &ContactMessage,
        envelope: &ContactEnvelope,
    ) -> Result<(), ContactRelayError> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            phone = message.phone.as_deref().unwrap_or(""),
            subject = %envelope.subject,
            message_chars = message.message.chars().count(),
            "contact relay not configured; submission logged only"
        );
        Ok(())
    }
}
