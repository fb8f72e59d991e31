use super::ProductQueryService;
use crate::application::{
    dto::ProductDetailDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetProductBySlugQuery {
    /// Path segment as received; it is matched verbatim.
    pub slug: String,
}

impl ProductQueryService {
    pub async fn get_product_by_slug(
        &self,
        query: GetProductBySlugQuery,
    ) -> ApplicationResult<ProductDetailDto> {
        let product = self
            .read_repo
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let image_count = self.images.count_images(product.id).await;
        tracing::debug!(product_id = %product.id, slug = %query.slug, image_count, "resolved product by slug");
        Ok(ProductDetailDto::new(product, image_count))
    }
}
