// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lumezza_catalog::application::ports::contact::{
    ContactEnvelope, ContactForwarder, ContactRelayError,
};
use lumezza_catalog::application::ports::images::ProductImageInventory;
use lumezza_catalog::domain::contact::ContactMessage;
use lumezza_catalog::domain::product::ProductId;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed timestamp for reproducible sitemap output.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Image counts keyed by product id; unknown ids have none.
#[derive(Default)]
pub struct StubImages(pub HashMap<i64, usize>);

#[async_trait]
impl ProductImageInventory for StubImages {
    async fn count_images(&self, id: ProductId) -> usize {
        self.0.get(&i64::from(id)).copied().unwrap_or(0)
    }
}

#[derive(Default)]
pub struct RecordingForwarder {
    pub sent: Mutex<Vec<(ContactMessage, ContactEnvelope)>>,
    pub reject_with: Option<u16>,
}

impl RecordingForwarder {
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactForwarder for RecordingForwarder {
    async fn forward(
        &self,
        message: &ContactMessage,
        envelope: &ContactEnvelope,
    ) -> Result<(), ContactRelayError> {
        if let Some(status) = self.reject_with {
            return Err(ContactRelayError::Rejected {
                status,
                detail: "rejected by stub".into(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((message.clone(), envelope.clone()));
        Ok(())
    }
}
