use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct GetProductByIdQuery {
    pub id: i64,
}

impl ProductQueryService {
    pub async fn get_product_by_id(
        &self,
        query: GetProductByIdQuery,
    ) -> ApplicationResult<ProductDetailDto> {
        let product = self
            .read_repo
            .find_by_id(ProductId::from(query.id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let image_count = self.images.count_images(product.id).await;
        Ok(ProductDetailDto::new(product, image_count))
    }
}
