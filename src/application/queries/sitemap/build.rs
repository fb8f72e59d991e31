use super::SitemapQueryService;
use crate::application::{
    dto::{ChangeFrequency, Sitemap, SitemapEntry},
    error::ApplicationResult,
};

const ROOT_PRIORITY: f32 = 1.0;
const PRODUCT_PRIORITY: f32 = 0.8;

impl SitemapQueryService {
    /// Root entry first, then one entry per product in catalog order.
    /// Colliding or empty slugs are emitted as they are.
    pub async fn build_sitemap(&self) -> ApplicationResult<Sitemap> {
        let products = self.read_repo.list().await?;
        let now = self.clock.now();

        let mut entries = Vec::with_capacity(products.len() + 1);
        entries.push(SitemapEntry {
            url: self.base_url.clone(),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: ROOT_PRIORITY,
        });
        entries.extend(products.iter().map(|product| SitemapEntry {
            url: format!("{}{}", self.base_url, product.path()),
            last_modified: now,
            change_frequency: ChangeFrequency::Weekly,
            priority: PRODUCT_PRIORITY,
        }));

        Ok(Sitemap { entries })
    }
}
