// src/infrastructure/catalog.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{Product, ProductCatalog};
use std::path::{Path, PathBuf};

/// Loads the catalog snapshot from the storefront's `products.json`.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogLoader {
    path: PathBuf,
}

impl JsonFileCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> DomainResult<ProductCatalog> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            DomainError::Persistence(format!(
                "failed to read catalog {}: {err}",
                self.path.display()
            ))
        })?;

        let catalog = parse_catalog(&raw)?;
        report_catalog(&catalog);
        tracing::info!(
            path = %self.path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Parse a JSON array of catalog records, keeping file order.
pub fn parse_catalog(raw: &str) -> DomainResult<ProductCatalog> {
    let products: Vec<Product> = serde_json::from_str(raw).map_err(|err| {
        if err.is_data() {
            DomainError::Validation(format!("invalid catalog record: {err}"))
        } else {
            DomainError::Persistence(format!("malformed catalog json: {err}"))
        }
    })?;
    Ok(ProductCatalog::from(products))
}

fn report_catalog(catalog: &ProductCatalog) {
    if catalog.is_empty() {
        tracing::warn!("catalog is empty; every lookup will miss");
        return;
    }

    for id in catalog.duplicate_ids() {
        tracing::warn!(product_id = %id, "duplicate product id; lookups return the first record");
    }

    for product in catalog.products().iter().filter(|p| p.slug().is_empty()) {
        tracing::warn!(product_id = %product.id, title = %product.title, "title produces an empty slug");
    }

    for collision in catalog.slug_collisions() {
        let ids: Vec<i64> = collision.ids.iter().map(|id| i64::from(*id)).collect();
        tracing::warn!(
            slug = %collision.slug,
            ?ids,
            "slug collision; only the first product is reachable by slug"
        );
    }
}
