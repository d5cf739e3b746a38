//! Catalog wire models

mod product;

pub use product::{DeliveryTier, Product, ProductCreate, ProductUpdate, in_stock};
