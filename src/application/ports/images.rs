use crate::domain::product::ProductId;
use async_trait::async_trait;

/// Highest image number probed per product.
pub const MAX_PRODUCT_IMAGES: usize = 20;

/// Counts the gallery images published for a product.
///
/// Images are numbered from 1 without gaps; counting stops at the first
/// missing number.
#[async_trait]
pub trait ProductImageInventory: Send + Sync {
    async fn count_images(&self, id: ProductId) -> usize;
}

/// Public path of a product image, `number` starting at 1.
pub fn image_path(id: ProductId, number: usize) -> String {
    format!("/products/{id}/image-{number}.png")
}
