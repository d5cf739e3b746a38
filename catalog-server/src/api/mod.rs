//! API route module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`admin`] - dashboard login
//! - [`products`] - product catalog CRUD
//! - [`contact`] - contact-form relay
//! - [`assistant`] - generative-text relay

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth;
use crate::core::ServerState;

pub mod convert;

pub mod admin;
pub mod assistant;
pub mod contact;
pub mod health;
pub mod products;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Catalog API - reads public, mutations admin-only
        .merge(products::router())
        // Admin login - public route
        .merge(admin::router())
        // Relays - public routes
        .merge(contact::router())
        .merge(assistant::router())
        // Health - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// Used by the HTTP server and by integration tests driving the router
/// directly as a service.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - the public pages are served from another origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        // Request ID - unique id per request, echoed in the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Admin session check - runs before routes, injects AdminSession
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ))
}
