//! Client error types

use thiserror::Error;

/// Client error type
///
/// API failures are keyed by HTTP status class; the server only ever
/// sends a `{message}` body, so the payload is the human-readable text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required or rejected (401/403)
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure (5xx)
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
