//! Product Repository
//!
//! Owns the product lifecycle: required-field validation on create, the
//! partial-update sentinel rules, and the availability invariant
//! (`availability == quantity > 0`) which is recomputed on every write
//! regardless of what a payload carried.

use chrono::Utc;
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Product;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN};
use shared::models::{ProductCreate, ProductUpdate, in_stock};

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products, natural storage order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self.base.db().select(PRODUCT_TABLE).await?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let pure_id = strip_table_prefix(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, pure_id)).await?;
        Ok(product)
    }

    /// Create a new product
    ///
    /// `name`, `category` and `imageUrl` must be present and non-blank;
    /// numeric fields default to 0 and must not be negative. Whatever
    /// `availability` the payload carried is discarded.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let name = required_text(data.name, "name", MAX_NAME_LEN)?;
        let category = required_text(data.category, "category", MAX_NAME_LEN)?;
        let image_url = required_text(data.image_url, "imageUrl", MAX_URL_LEN)?;

        let price = data.price.unwrap_or_default();
        if price < Decimal::ZERO {
            return Err(RepoError::Validation("price must not be negative".into()));
        }
        let quantity = data.quantity.unwrap_or(0);
        if quantity < 0 {
            return Err(RepoError::Validation(
                "quantity must not be negative".into(),
            ));
        }

        let description = present_text(data.description, "description", MAX_NOTE_LEN)?;
        let estimated_delivery =
            present_text(data.estimated_delivery, "estimatedDelivery", MAX_NAME_LEN)?;

        let now = Utc::now().timestamp_millis();
        let product = Product {
            id: None,
            name,
            category,
            description,
            price,
            quantity,
            availability: in_stock(quantity),
            image_url,
            features: data.features.unwrap_or_default(),
            estimated_delivery,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product (partial fields)
    ///
    /// Read-modify-write: absent fields keep their stored value, and an
    /// empty text field is a "no change" sentinel rather than a clear.
    /// `availability` is recomputed from the resulting quantity.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let pure_id = strip_table_prefix(PRODUCT_TABLE, id).to_string();

        let mut product: Product = self
            .base
            .db()
            .select((PRODUCT_TABLE, pure_id.as_str()))
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

        if let Some(name) = present_text(data.name, "name", MAX_NAME_LEN)? {
            product.name = name;
        }
        if let Some(category) = present_text(data.category, "category", MAX_NAME_LEN)? {
            product.category = category;
        }
        if let Some(image_url) = present_text(data.image_url, "imageUrl", MAX_URL_LEN)? {
            product.image_url = image_url;
        }
        if let Some(description) = present_text(data.description, "description", MAX_NOTE_LEN)? {
            product.description = Some(description);
        }
        if let Some(hint) = present_text(data.estimated_delivery, "estimatedDelivery", MAX_NAME_LEN)?
        {
            product.estimated_delivery = Some(hint);
        }
        if let Some(price) = data.price {
            if price < Decimal::ZERO {
                return Err(RepoError::Validation("price must not be negative".into()));
            }
            product.price = price;
        }
        if let Some(quantity) = data.quantity {
            if quantity < 0 {
                return Err(RepoError::Validation(
                    "quantity must not be negative".into(),
                ));
            }
            product.quantity = quantity;
        }
        if let Some(features) = data.features {
            product.features = features;
        }

        // The invariant holds no matter which path set the quantity
        product.availability = in_stock(product.quantity);
        product.updated_at = Utc::now().timestamp_millis();

        // The id stays out of the content; SurrealDB keeps the record key
        product.id = None;
        let updated: Option<Product> = self
            .base
            .db()
            .update((PRODUCT_TABLE, pure_id.as_str()))
            .content(product)
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(PRODUCT_TABLE, id);
        let deleted: Option<Product> = self.base.db().delete((PRODUCT_TABLE, pure_id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}

/// A required text field: must be present and non-blank after trimming.
fn required_text(value: Option<String>, field: &str, max_len: usize) -> RepoResult<String> {
    match present_text(value, field, max_len)? {
        Some(v) => Ok(v),
        None => Err(RepoError::Validation(format!("{field} is required"))),
    }
}

/// An optional text field: `None` and blank collapse to `None` ("no
/// change" on update), anything else is trimmed and length-checked.
fn present_text(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> RepoResult<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.len() > max_len {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.len()
        )));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::local::Mem;

    async fn repo() -> ProductRepository {
        let db = Surreal::new::<Mem>(()).await.expect("in-memory db");
        db.use_ns("test").use_db("catalog").await.expect("ns/db");
        ProductRepository::new(db)
    }

    fn shingles(quantity: i64) -> ProductCreate {
        ProductCreate {
            name: Some("Asphalt Shingles".into()),
            category: Some("shingles".into()),
            description: Some("Architectural asphalt shingles".into()),
            price: Some(Decimal::from(100)),
            quantity: Some(quantity),
            availability: None,
            image_url: Some("https://cdn.example.com/shingles.jpg".into()),
            features: Some(vec!["Wind resistant".into()]),
            estimated_delivery: None,
        }
    }

    #[tokio::test]
    async fn create_derives_availability_from_quantity() {
        let repo = repo().await;

        let out_of_stock = repo.create(shingles(0)).await.expect("create");
        assert!(!out_of_stock.availability);

        let stocked = repo.create(shingles(25)).await.expect("create");
        assert!(stocked.availability);
    }

    #[tokio::test]
    async fn create_discards_client_availability() {
        let repo = repo().await;
        let mut payload = shingles(0);
        payload.availability = Some(true);

        let created = repo.create(payload).await.expect("create");
        assert!(!created.availability);
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields() {
        let repo = repo().await;

        let mut missing_image = shingles(10);
        missing_image.image_url = None;
        assert!(matches!(
            repo.create(missing_image).await,
            Err(RepoError::Validation(_))
        ));

        let mut blank_name = shingles(10);
        blank_name.name = Some("   ".into());
        assert!(matches!(
            repo.create(blank_name).await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn create_rejects_negative_numbers() {
        let repo = repo().await;

        let mut negative_price = shingles(10);
        negative_price.price = Some(Decimal::from(-1));
        assert!(matches!(
            repo.create(negative_price).await,
            Err(RepoError::Validation(_))
        ));

        let mut negative_quantity = shingles(10);
        negative_quantity.quantity = Some(-3);
        assert!(matches!(
            repo.create(negative_quantity).await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn round_trip_preserves_fields() {
        let repo = repo().await;
        let created = repo.create(shingles(25)).await.expect("create");
        let id = created.id.as_ref().expect("id assigned").to_string();

        let fetched = repo
            .find_by_id(&id)
            .await
            .expect("find")
            .expect("present");
        assert_eq!(fetched.name, "Asphalt Shingles");
        assert_eq!(fetched.category, "shingles");
        assert_eq!(fetched.price, Decimal::from(100));
        assert_eq!(fetched.quantity, 25);
        assert!(fetched.availability);
        assert_eq!(fetched.features, vec!["Wind resistant".to_string()]);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn partial_update_keeps_remaining_fields_and_flips_availability() {
        let repo = repo().await;
        let created = repo.create(shingles(25)).await.expect("create");
        let id = created.id.as_ref().expect("id").to_string();

        let updated = repo
            .update(
                &id,
                ProductUpdate {
                    quantity: Some(0),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.quantity, 0);
        assert!(!updated.availability);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.image_url, created.image_url);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_treats_empty_text_as_no_change() {
        let repo = repo().await;
        let created = repo.create(shingles(10)).await.expect("create");
        let id = created.id.as_ref().expect("id").to_string();

        let updated = repo
            .update(
                &id,
                ProductUpdate {
                    name: Some(String::new()),
                    category: Some("  ".into()),
                    quantity: Some(40),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.name, "Asphalt Shingles");
        assert_eq!(updated.category, "shingles");
        assert_eq!(updated.quantity, 40);
    }

    #[tokio::test]
    async fn update_discards_client_availability() {
        let repo = repo().await;
        let created = repo.create(shingles(25)).await.expect("create");
        let id = created.id.as_ref().expect("id").to_string();

        let updated = repo
            .update(
                &id,
                ProductUpdate {
                    availability: Some(false),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        // quantity is still 25, so the store keeps the product available
        assert!(updated.availability);
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let repo = repo().await;
        let err = repo
            .update(
                "product:missing",
                ProductUpdate {
                    quantity: Some(5),
                    ..Default::default()
                },
            )
            .await
            .expect_err("should fail");
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_product_leaves_collection_unchanged() {
        let repo = repo().await;
        repo.create(shingles(5)).await.expect("create");

        let err = repo.delete("product:missing").await.expect_err("missing");
        assert!(matches!(err, RepoError::NotFound(_)));

        let all = repo.find_all().await.expect("list");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn delete_then_lookup_is_gone() {
        let repo = repo().await;
        let created = repo.create(shingles(5)).await.expect("create");
        let id = created.id.as_ref().expect("id").to_string();

        repo.delete(&id).await.expect("delete");
        assert!(repo.find_by_id(&id).await.expect("find").is_none());
    }
}
