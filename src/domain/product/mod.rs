pub mod catalog;
pub mod entity;
pub mod repository;
pub mod slug;
pub mod value_objects;

pub use catalog::{ProductCatalog, SlugCollision, find_product_by_id, find_product_by_slug};
pub use entity::Product;
pub use repository::ProductReadRepository;
pub use slug::{generate_slug, is_canonical_slug};
pub use value_objects::{ProductId, ProductPrice, ProductTitle};
