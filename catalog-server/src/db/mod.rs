//! Database Module
//!
//! Embedded SurrealDB storage: document models and repositories.

pub mod models;
pub mod repository;
