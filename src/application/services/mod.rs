// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::contact::ContactCommandService,
        ports::{
            contact::{ContactEnvelope, ContactForwarder},
            images::ProductImageInventory,
            time::Clock,
        },
        queries::{products::ProductQueryService, sitemap::SitemapQueryService},
    },
    domain::product::ProductReadRepository,
};

pub struct ApplicationServices {
    pub product_queries: Arc<ProductQueryService>,
    pub sitemap_queries: Arc<SitemapQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
}

impl ApplicationServices {
    pub fn new(
        product_repo: Arc<dyn ProductReadRepository>,
        image_inventory: Arc<dyn ProductImageInventory>,
        contact_forwarder: Arc<dyn ContactForwarder>,
        contact_envelope: ContactEnvelope,
        clock: Arc<dyn Clock>,
        site_base_url: impl Into<String>,
    ) -> Self {
        let product_queries = Arc::new(ProductQueryService::new(
            Arc::clone(&product_repo),
            Arc::clone(&image_inventory),
        ));

        let sitemap_queries = Arc::new(SitemapQueryService::new(
            Arc::clone(&product_repo),
            Arc::clone(&clock),
            site_base_url,
        ));

        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&contact_forwarder),
            Arc::clone(&product_repo),
            contact_envelope,
        ));

        Self {
            product_queries,
            sitemap_queries,
            contact_commands,
        }
    }
}
