mod service;
mod submit;

pub use service::{ContactCommandService, PRODUCT_INQUIRY_SUBJECT_PREFIX};
pub use submit::SubmitContactCommand;
