// src/infrastructure/images.rs
use crate::application::ports::images::{MAX_PRODUCT_IMAGES, ProductImageInventory};
use crate::domain::product::ProductId;
use async_trait::async_trait;
use std::path::PathBuf;

/// Counts `<root>/<id>/image-<n>.png` files on disk.
#[derive(Debug, Clone)]
pub struct FsProductImageInventory {
    root: PathBuf,
}

impl FsProductImageInventory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn image_file(&self, id: ProductId, number: usize) -> PathBuf {
        self.root
            .join(id.to_string())
            .join(format!("image-{number}.png"))
    }
}

#[async_trait]
impl ProductImageInventory for FsProductImageInventory {
    async fn count_images(&self, id: ProductId) -> usize {
        let mut count = 0;
        for number in 1..=MAX_PRODUCT_IMAGES {
            match tokio::fs::try_exists(self.image_file(id, number)).await {
                Ok(true) => count = number,
                Ok(false) => break,
                Err(err) => {
                    tracing::debug!(product_id = %id, number, error = %err, "image probe failed");
                    break;
                }
            }
        }
        count
    }
}
