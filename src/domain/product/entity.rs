// src/domain/product/entity.rs
use crate::domain::product::slug::generate_slug;
use crate::domain::product::value_objects::{ProductId, ProductPrice, ProductTitle};
use serde::Deserialize;

/// Read-only catalog record.
///
/// The serde field names follow the catalog file owned by the storefront
/// (`"ID #:"`, `"Title"`, `"Description"`, `"Price"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "ID #:")]
    pub id: ProductId,
    #[serde(rename = "Title")]
    pub title: ProductTitle,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Price")]
    pub price: ProductPrice,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: ProductTitle,
        description: impl Into<String>,
        price: ProductPrice,
    ) -> Self {
        Self {
            id,
            title,
            description: description.into(),
            price,
        }
    }

    /// Slug derived from the current title.
    pub fn slug(&self) -> String {
        generate_slug(self.title.as_str())
    }

    /// Public path of the detail page.
    pub fn path(&self) -> String {
        format!("/product/{}", self.slug())
    }
}
