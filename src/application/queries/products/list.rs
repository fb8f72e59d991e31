use super::ProductQueryService;
use crate::application::{
    dto::{ProductListDto, ProductSummaryDto},
    error::ApplicationResult,
};

impl ProductQueryService {
    pub async fn list_products(&self) -> ApplicationResult<ProductListDto> {
        let products = self.read_repo.list().await?;
        let items: Vec<ProductSummaryDto> = products.iter().map(ProductSummaryDto::from).collect();
        Ok(items.into())
    }
}
