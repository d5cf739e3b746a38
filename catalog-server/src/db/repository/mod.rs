//! Repository Module
//!
//! CRUD operations over SurrealDB tables. Repositories are the exclusive
//! owners of persistence state: validation of required fields and the
//! availability invariant both live here, not in callers.

pub mod product;

pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => AppError::not_found("Product not found"),
            RepoError::Validation(detail) => {
                // Clients only ever see the generic message; the reason
                // for the rejection stays in the server log.
                tracing::warn!(target: "catalog", detail = %detail, "Rejected invalid payload");
                AppError::validation("Invalid data")
            }
            RepoError::Database(detail) => AppError::database(detail),
        }
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Strip a `table:` prefix from an id, accepting both `table:key` and
/// bare `key` forms from the API surface.
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}
