// src/infrastructure/repositories/mod.rs
mod in_memory_product;

pub use in_memory_product::InMemoryProductRepository;
