// src/infrastructure/contact/formspree.rs
use crate::application::ports::contact::{ContactEnvelope, ContactForwarder, ContactRelayError};
use crate::domain::contact::ContactMessage;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Posts submissions to a Formspree-style endpoint as a url-encoded form,
/// the same fields the storefront's HTML form sends.
#[derive(Debug, Clone)]
pub struct FormspreeForwarder {
    client: reqwest::Client,
    endpoint: String,
}

impl FormspreeForwarder {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ContactRelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ContactRelayError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub(crate) fn encode_form(
    message: &ContactMessage,
    envelope: &ContactEnvelope,
) -> Result<String, serde_urlencoded::ser::Error> {
    let mut fields: Vec<(&str, &str)> = vec![
        ("name", message.name.as_str()),
        ("email", message.email.as_str()),
    ];
    if let Some(phone) = message.phone.as_deref() {
        fields.push(("phone", phone));
    }
    fields.push(("message", message.message.as_str()));
    fields.push(("_subject", envelope.subject.as_str()));
    if let Some(recipient) = envelope.recipient.as_deref() {
        fields.push(("_to", recipient));
    }
    serde_urlencoded::to_string(fields)
}

/// Pull a human readable reason out of the relay's error payload.
fn rejection_detail(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.chars().take(200).collect();
    };

    if let Some(errors) = json.get("errors").and_then(Value::as_array) {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    json.get("error")
        .and_then(Value::as_str)
        .map_or_else(|| json.to_string(), str::to_string)
}

#[async_trait]
impl ContactForwarder for FormspreeForwarder {
    async fn forward(
        &self,
        message: &ContactMessage,
        envelope: &ContactEnvelope,
    ) -> Result<(), ContactRelayError> {
        let body = encode_form(message, envelope)
            .map_err(|err| ContactRelayError::Transport(format!("form encoding failed: {err}")))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| ContactRelayError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "contact relay accepted submission");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(ContactRelayError::Rejected {
            status: status.as_u16(),
            detail: rejection_detail(&text),
        })
    }
}
