// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
