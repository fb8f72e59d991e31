//! Catalog backend for the Lumezza jewelry storefront.
//!
//! Products are addressed by a slug derived from their title; see
//! [`domain::product::generate_slug`].
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
