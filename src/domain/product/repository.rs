use crate::domain::errors::DomainResult;
use crate::domain::product::entity::Product;
use crate::domain::product::value_objects::ProductId;
use async_trait::async_trait;

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Product>>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Product>>;
}
