mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetProductByIdQuery;
pub use get_by_slug::GetProductBySlugQuery;
pub use service::ProductQueryService;
