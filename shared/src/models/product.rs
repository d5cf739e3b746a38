//! Product Model
//!
//! Wire representation of a catalog product. Field names follow the JSON
//! surface of the REST API (camelCase), ids are the string form
//! `product:⟨key⟩` assigned by the store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a product counts as in stock.
///
/// `availability` is derived from this, never taken from a client.
pub fn in_stock(quantity: i64) -> bool {
    quantity > 0
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub availability: bool,
    pub image_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create product payload
///
/// Required fields are still `Option` here so a missing field reaches the
/// store's validation (400) instead of failing body extraction.
/// `availability` is accepted for wire compatibility and discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub availability: Option<bool>,
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub estimated_delivery: Option<String>,
}

/// Update product payload
///
/// Any subset of fields. An absent field keeps the stored value, and an
/// empty text field is treated the same as absent rather than clearing
/// the stored value. `availability` is discarded and recomputed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub availability: Option<bool>,
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub estimated_delivery: Option<String>,
}

/// Fulfillment estimate derived from `(availability, quantity)` at
/// display time. The stored `estimated_delivery` hint is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryTier {
    OutOfStock,
    TwoToThreeDays,
    ThreeToFiveDays,
    FiveToSevenDays,
}

impl DeliveryTier {
    /// Tier buckets use strict comparisons: exactly 50 units is still
    /// "3-5 business days", exactly 20 is still "5-7 business days".
    pub fn from_stock(availability: bool, quantity: i64) -> Self {
        if !availability {
            DeliveryTier::OutOfStock
        } else if quantity > 50 {
            DeliveryTier::TwoToThreeDays
        } else if quantity > 20 {
            DeliveryTier::ThreeToFiveDays
        } else {
            DeliveryTier::FiveToSevenDays
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::from_stock(product.availability, product.quantity)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTier::OutOfStock => "Out of stock",
            DeliveryTier::TwoToThreeDays => "2-3 business days",
            DeliveryTier::ThreeToFiveDays => "3-5 business days",
            DeliveryTier::FiveToSevenDays => "5-7 business days",
        }
    }
}

impl std::fmt::Display for DeliveryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
