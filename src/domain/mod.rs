// src/domain/mod.rs
pub mod contact;
pub mod errors;
pub mod gallery;
pub mod product;
