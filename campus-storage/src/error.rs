//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A natural-key record was saved without its key.
    #[error("{entity} record has no key and its key cannot be generated")]
    MissingKey { entity: &'static str },

    /// Invalid data.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
