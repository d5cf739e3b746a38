//! Database models

pub mod serde_helpers;

mod product;

pub use product::{Product, ProductId};
