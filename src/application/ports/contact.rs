// src/application/ports/contact.rs
use crate::domain::contact::ContactMessage;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactRelayError {
    #[error("relay rejected submission with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
    #[error("relay unreachable: {0}")]
    Transport(String),
}

/// Envelope fields added to every relayed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEnvelope {
    pub subject: String,
    pub recipient: Option<String>,
}

#[async_trait]
pub trait ContactForwarder: Send + Sync {
    async fn forward(
        &self,
        message: &ContactMessage,
        envelope: &ContactEnvelope,
    ) -> Result<(), ContactRelayError>;
}
