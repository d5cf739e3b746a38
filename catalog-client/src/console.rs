//! Admin Catalog Console
//!
//! CRUD workbench over the typed HTTP client. Holds a local in-memory
//! mirror of the product collection, fetched once, and reconciles it
//! with each mutation response: append on create, replace-by-id on
//! update, remove-by-id on delete. Nothing is applied speculatively, so
//! a failed call leaves the mirror untouched.

use crate::error::{ClientError, ClientResult};
use crate::filter::matches_search;
use crate::http::CatalogClient;
use shared::client::ApiMessage;
use shared::models::{Product, ProductCreate, ProductUpdate};

pub struct CatalogConsole {
    client: CatalogClient,
    products: Vec<Product>,
    pending_delete: Option<String>,
}

impl CatalogConsole {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            pending_delete: None,
        }
    }

    /// The local mirror of the collection
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn client_mut(&mut self) -> &mut CatalogClient {
        &mut self.client
    }

    /// Fetch the full collection into the mirror
    ///
    /// Refuses to load without an authenticated session, mirroring the
    /// dashboard's route guard.
    pub async fn load(&mut self) -> ClientResult<()> {
        if !self.client.is_authenticated() {
            return Err(ClientError::Unauthorized(
                "admin session required before loading the console".into(),
            ));
        }
        self.products = self.client.list_products().await?;
        tracing::debug!(products = self.products.len(), "Console mirror loaded");
        Ok(())
    }

    /// Case-insensitive substring filter on name OR category, local only
    pub fn search(&self, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| matches_search(p, term))
            .collect()
    }

    /// Create a product and append the server's version to the mirror
    ///
    /// The returned record carries the server-assigned id and the
    /// recomputed availability, which is what lands in the mirror.
    pub async fn add(&mut self, fields: ProductCreate) -> ClientResult<Product> {
        let created = self.client.create_product(&fields).await?;
        mirror::append(&mut self.products, created.clone());
        Ok(created)
    }

    /// Update a product and replace the matching mirror entry by id
    pub async fn edit(&mut self, id: &str, fields: ProductUpdate) -> ClientResult<Product> {
        let updated = self.client.update_product(id, &fields).await?;
        mirror::replace(&mut self.products, &updated);
        Ok(updated)
    }

    /// Arm the irreversible-action confirmation for one product
    pub fn confirm_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    /// Dismiss a pending confirmation
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Delete the product whose confirmation was armed
    ///
    /// Without a prior [`confirm_delete`](Self::confirm_delete) this is
    /// rejected locally; deletion is irreversible and never happens on a
    /// single call.
    pub async fn delete_confirmed(&mut self) -> ClientResult<ApiMessage> {
        let Some(id) = self.pending_delete.take() else {
            return Err(ClientError::Validation(
                "no delete confirmation pending".into(),
            ));
        };
        let message = self.client.delete_product(&id).await?;
        mirror::remove(&mut self.products, &id);
        Ok(message)
    }
}

/// Mirror reconciliation rules, kept as pure functions so the sync
/// behavior is testable without a network.
mod mirror {
    use shared::models::Product;

    pub fn append(list: &mut Vec<Product>, created: Product) {
        list.push(created);
    }

    pub fn replace(list: &mut [Product], updated: &Product) {
        if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
            *slot = updated.clone();
        }
    }

    pub fn remove(list: &mut Vec<Product>, id: &str) {
        list.retain(|p| p.id.as_deref() != Some(id));
    }
}
