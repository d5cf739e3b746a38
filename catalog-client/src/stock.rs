//! Stock View
//!
//! Read-only projection of the catalog: one full fetch, a delivery tier
//! derived per item, and two independent composable filters (free-text
//! search and tri-state availability). Changing a filter never
//! re-fetches.

use crate::error::ClientResult;
use crate::filter::{AvailabilityFilter, matches_search};
use crate::http::CatalogClient;
use shared::models::{DeliveryTier, Product};

/// One catalog entry with its derived delivery estimate
#[derive(Debug, Clone)]
pub struct StockRow {
    pub product: Product,
    pub tier: DeliveryTier,
}

/// Stock listing with local search and availability filtering
#[derive(Debug, Default)]
pub struct StockView {
    rows: Vec<StockRow>,
    search: String,
    availability: AvailabilityFilter,
}

impl StockView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full collection and derive each row's delivery tier.
    ///
    /// The tier comes from `(availability, quantity)` at display time;
    /// the stored `estimatedDelivery` hint is deliberately ignored.
    pub async fn load(&mut self, client: &CatalogClient) -> ClientResult<()> {
        let products = client.list_products().await?;
        self.rows = products
            .into_iter()
            .map(|product| StockRow {
                tier: DeliveryTier::for_product(&product),
                product,
            })
            .collect();
        tracing::debug!(rows = self.rows.len(), "Stock view loaded");
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_availability(&mut self, filter: AvailabilityFilter) {
        self.availability = filter;
    }

    /// All loaded rows, unfiltered
    pub fn rows(&self) -> &[StockRow] {
        &self.rows
    }

    /// Rows passing both filters
    pub fn visible(&self) -> Vec<&StockRow> {
        self.rows
            .iter()
            .filter(|row| {
                matches_search(&row.product, &self.search)
                    && self.availability.matches(row.product.availability)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn row(name: &str, category: &str, quantity: i64) -> StockRow {
        let now = Utc::now();
        let product = Product {
            id: Some(format!("product:{}", name.to_lowercase().replace(' ', "-"))),
            name: name.into(),
            category: category.into(),
            description: None,
            price: Decimal::from(200),
            quantity,
            availability: quantity > 0,
            image_url: "https://cdn.example.com/p.jpg".into(),
            features: vec![],
            estimated_delivery: Some("whenever".into()),
            created_at: now,
            updated_at: now,
        };
        StockRow {
            tier: DeliveryTier::for_product(&product),
            product,
        }
    }

    fn view_with_rows() -> StockView {
        StockView {
            rows: vec![
                row("Clay Tiles", "tiles", 55),
                row("Roofing Sheets", "metal", 100),
                row("Ashpalt Shingles", "shingles", 0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn tiers_derive_from_quantity_not_the_stored_hint() {
        let view = view_with_rows();
        let tiers: Vec<DeliveryTier> = view.rows().iter().map(|r| r.tier).collect();
        assert_eq!(
            tiers,
            vec![
                DeliveryTier::TwoToThreeDays,
                DeliveryTier::TwoToThreeDays,
                DeliveryTier::OutOfStock,
            ]
        );
    }

    #[test]
    fn filters_compose_independently() {
        let mut view = view_with_rows();

        view.set_search("tile");
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].product.name, "Clay Tiles");

        // The availability filter applies on top of the search
        view.set_availability(AvailabilityFilter::OutOfStock);
        assert!(view.visible().is_empty());

        // Search still matches out-of-stock items once it is relaxed
        view.set_search("");
        let names: Vec<&str> = view
            .visible()
            .iter()
            .map(|r| r.product.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ashpalt Shingles"]);
    }

    #[test]
    fn all_filter_shows_everything() {
        let mut view = view_with_rows();
        view.set_availability(AvailabilityFilter::All);
        assert_eq!(view.visible().len(), 3);

        view.set_availability(AvailabilityFilter::InStock);
        assert_eq!(view.visible().len(), 2);
    }
}
