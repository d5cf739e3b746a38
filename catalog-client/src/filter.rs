//! Local catalog filters
//!
//! The search and availability filters shared by the admin console and
//! the stock view. Filtering is synchronous over the local mirror and
//! never triggers a re-fetch.

use shared::models::Product;

/// Case-insensitive substring match against name OR category.
///
/// An empty term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    product.name.to_lowercase().contains(&term) || product.category.to_lowercase().contains(&term)
}

/// Tri-state availability filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl AvailabilityFilter {
    pub fn matches(&self, availability: bool) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::InStock => availability,
            AvailabilityFilter::OutOfStock => !availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product(name: &str, category: &str) -> Product {
        let now = Utc::now();
        Product {
            id: Some(format!("product:{}", name.to_lowercase().replace(' ', "-"))),
            name: name.into(),
            category: category.into(),
            description: None,
            price: Decimal::from(100),
            quantity: 10,
            availability: true,
            image_url: "https://cdn.example.com/p.jpg".into(),
            features: vec![],
            estimated_delivery: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn search_matches_name_and_category_case_insensitively() {
        let by_category = product("Clay Roofing", "tiles");
        let by_name = product("Spanish Tile Classic", "clay");
        let neither = product("Solar Panel", "solar");

        assert!(matches_search(&by_category, "tile"));
        assert!(matches_search(&by_name, "tile"));
        assert!(matches_search(&by_name, "TILE"));
        assert!(!matches_search(&neither, "tile"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search(&product("Anything", "metal"), ""));
    }

    #[test]
    fn availability_filter_states() {
        assert!(AvailabilityFilter::All.matches(true));
        assert!(AvailabilityFilter::All.matches(false));
        assert!(AvailabilityFilter::InStock.matches(true));
        assert!(!AvailabilityFilter::InStock.matches(false));
        assert!(!AvailabilityFilter::OutOfStock.matches(true));
        assert!(AvailabilityFilter::OutOfStock.matches(false));
    }
}
