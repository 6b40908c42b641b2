//! Storage adapter errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures inside the storage adapters, mapped to `DomainError` at the port edge.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record at {path}: {reason}")]
    DeserializationFailed { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}
