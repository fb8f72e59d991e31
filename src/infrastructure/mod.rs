pub mod catalog;
pub mod contact;
pub mod images;
pub mod repositories;
pub mod time;
