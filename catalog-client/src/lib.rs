//! Catalog Client - HTTP client for the catalog server
//!
//! Provides the typed network calls to the catalog API plus the two
//! client-side workbenches built on them: the admin console (local
//! mirror + CRUD round-trips) and the read-only stock view (delivery
//! tiers + composable filters).

pub mod console;
pub mod error;
pub mod filter;
pub mod http;
pub mod stock;

pub use console::CatalogConsole;
pub use error::{ClientError, ClientResult};
pub use filter::{AvailabilityFilter, matches_search};
pub use http::CatalogClient;
pub use stock::{StockRow, StockView};

// Re-export shared types for convenience
pub use shared::models::{DeliveryTier, Product, ProductCreate, ProductUpdate};
