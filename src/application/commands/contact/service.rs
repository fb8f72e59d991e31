use std::sync::Arc;

use crate::application::ports::contact::{ContactEnvelope, ContactForwarder};
use crate::domain::product::ProductReadRepository;

/// Subject prefix for inquiries tied to a product; the product title follows.
pub const PRODUCT_INQUIRY_SUBJECT_PREFIX: &str = "Lumezza Jewelry Inquiry - ";

pub struct ContactCommandService {
    pub(super) forwarder: Arc<dyn ContactForwarder>,
    pub(super) products: Arc<dyn ProductReadRepository>,
    pub(super) envelope: ContactEnvelope,
}

impl ContactCommandService {
    pub fn new(
        forwarder: Arc<dyn ContactForwarder>,
        products: Arc<dyn ProductReadRepository>,
        envelope: ContactEnvelope,
    ) -> Self {
        Self {
            forwarder,
            products,
            envelope,
        }
    }
}
