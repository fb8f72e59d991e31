use crate::application::ports::images::image_path;
use crate::domain::{gallery::Gallery, product::Product};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Detail page path, `/product/{slug}`.
    pub path: String,
    pub price: f64,
    pub primary_image: String,
}

impl From<&Product> for ProductSummaryDto {
    fn from(product: &Product) -> Self {
        let slug = product.slug();
        Self {
            id: product.id.into(),
            title: product.title.as_str().to_string(),
            path: format!("/product/{slug}"),
            slug,
            price: product.price.value(),
            primary_image: image_path(product.id, 1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub path: String,
    pub description: String,
    pub price: f64,
    pub image_count: usize,
    pub images: Vec<String>,
    /// Whether the gallery offers arrows and thumbnails.
    pub shows_navigation: bool,
}

impl ProductDetailDto {
    pub fn new(product: Product, image_count: usize) -> Self {
        let slug = product.slug();
        let gallery = Gallery::new(image_count);
        let images = (1..=image_count)
            .map(|number| image_path(product.id, number))
            .collect();
        Self {
            id: product.id.into(),
            path: format!("/product/{slug}"),
            slug,
            price: product.price.value(),
            title: product.title.into_inner(),
            description: product.description,
            image_count,
            images,
            shows_navigation: gallery.shows_navigation(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListDto {
    pub items: Vec<ProductSummaryDto>,
    pub total: usize,
}

impl From<Vec<ProductSummaryDto>> for ProductListDto {
    fn from(items: Vec<ProductSummaryDto>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
