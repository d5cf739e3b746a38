//! Type conversions
//!
//! Maps database models (`db::models`) onto API response models
//! (`shared::models`). Record ids become their `table:key` string form.

use chrono::{DateTime, Utc};

use crate::db::models as db;
use shared::models as api;

pub fn option_record_id_to_string(id: &Option<surrealdb::RecordId>) -> Option<String> {
    id.as_ref().map(|id| id.to_string())
}

/// Epoch milliseconds to a wire timestamp
pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

impl From<db::Product> for api::Product {
    fn from(p: db::Product) -> Self {
        Self {
            id: option_record_id_to_string(&p.id),
            name: p.name,
            category: p.category,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
            availability: p.availability,
            image_url: p.image_url,
            features: p.features,
            estimated_delivery: p.estimated_delivery,
            created_at: millis_to_datetime(p.created_at),
            updated_at: millis_to_datetime(p.updated_at),
        }
    }
}
