mod formspree;
mod log_only;

pub use formspree::FormspreeForwarder;
pub use log_only::LogOnlyForwarder;
