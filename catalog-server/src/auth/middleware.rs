//! Authentication middleware
//!
//! Guards state-changing catalog routes with the admin JWT. A client-side
//! flag is never trusted; every mutation is validated server-side.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::auth::{AdminSession, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Admin-session middleware
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`AdminSession`] into the request extensions.
///
/// # Routes that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths
/// - `GET` product reads (public listing, detail)
/// - `/api/admin/login`, `/api/health`, `/api/contact`, `/api/assistant`
///
/// # Errors
///
/// | Failure | Status |
/// |---------|--------|
/// | Missing Authorization header | 401 |
/// | Expired token | 401 |
/// | Invalid token | 401 |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight passes through
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path();

    // Non-API routes fall through to their usual 404
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_route(req.method(), path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?,
        None => {
            tracing::warn!(uri = %req.uri(), "Rejected unauthenticated mutation");
            return Err(AppError::Unauthorized);
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let session = AdminSession::from(claims);
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(uri = %req.uri(), error = %e, "Rejected invalid admin token");
            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// Public API surface: everything a visitor can reach without a session.
fn is_public_route(method: &Method, path: &str) -> bool {
    if matches!(
        path,
        "/api/admin/login" | "/api/health" | "/api/contact" | "/api/assistant"
    ) {
        return true;
    }

    // Catalog reads are public; mutations on the same paths are not
    *method == Method::GET && (path == "/api/products" || path.starts_with("/api/products/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_reads_are_public() {
        assert!(is_public_route(&Method::GET, "/api/products"));
        assert!(is_public_route(&Method::GET, "/api/products/product:abc"));
    }

    #[test]
    fn product_mutations_need_a_session() {
        assert!(!is_public_route(&Method::POST, "/api/products"));
        assert!(!is_public_route(&Method::PUT, "/api/products/product:abc"));
        assert!(!is_public_route(
            &Method::DELETE,
            "/api/products/product:abc"
        ));
    }

    #[test]
    fn login_and_relays_are_public() {
        assert!(is_public_route(&Method::POST, "/api/admin/login"));
        assert!(is_public_route(&Method::GET, "/api/health"));
        assert!(is_public_route(&Method::POST, "/api/contact"));
        assert!(is_public_route(&Method::POST, "/api/assistant"));
    }
}
