use crate::domain::errors::DomainResult;
use crate::domain::product::{Product, ProductCatalog, ProductId, ProductReadRepository};
use async_trait::async_trait;

/// Read repository over a loaded catalog snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    catalog: ProductCatalog,
}

impl InMemoryProductRepository {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryProductRepository {
    async fn list(&self) -> DomainResult<Vec<Product>> {
        Ok(self.catalog.products().to_vec())
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.catalog.find_by_id(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Product>> {
        Ok(self.catalog.find_by_slug(slug).cloned())
    }
}
