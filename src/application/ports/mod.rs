// src/application/ports/mod.rs
pub mod contact;
pub mod images;
pub mod time;

