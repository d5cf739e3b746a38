//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Product ID type
pub type ProductId = RecordId;

/// Product record as stored in SurrealDB
///
/// `availability` is owned by the repository: it is recomputed from
/// `quantity` on every write and never taken from a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<ProductId>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
    pub availability: bool,
    pub image_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
    /// Epoch milliseconds, store-managed
    pub created_at: i64,
    pub updated_at: i64,
}
