//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by album storage
#[derive(Debug, Error)]
pub enum StoreError {
    /// No album has the requested id
    #[error("album {0} not found")]
    NotFound(String),

    /// An album with the id is already present
    #[error("album {0} already exists")]
    AlreadyExists(String),

    /// The underlying database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
