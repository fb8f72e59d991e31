pub mod products;
pub mod sitemap;
