pub mod contact;
pub mod products;
pub mod sitemap;

pub use contact::ContactReceiptDto;
pub use products::{ProductDetailDto, ProductListDto, ProductSummaryDto};
pub use sitemap::{ChangeFrequency, Sitemap, SitemapEntry};
