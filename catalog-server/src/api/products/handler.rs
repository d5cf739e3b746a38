//! Product API Handlers
//!
//! Thin delegation to the product repository plus status mapping; the
//! availability invariant and field validation live in the store.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::ApiMessage;
use shared::models::{Product, ProductCreate, ProductUpdate};

/// GET /api/products - full catalog listing
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = state.product_repository();
    let products = repo.find_all().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/{id} - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = state.product_repository();
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product.into()))
}

/// POST /api/products - create product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let repo = state.product_repository();
    let product = repo.create(payload).await?;

    tracing::info!(
        id = %product.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        name = %product.name,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /api/products/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let repo = state.product_repository();
    let product = repo.update(&id, payload).await?;

    tracing::info!(id = %id, quantity = product.quantity, "Product updated");

    Ok(Json(product.into()))
}

/// DELETE /api/products/{id} - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiMessage>> {
    let repo = state.product_repository();
    repo.delete(&id).await?;

    tracing::info!(id = %id, "Product removed");

    Ok(Json(ApiMessage::new("Product removed")))
}
