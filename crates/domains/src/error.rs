//! # StorageError
//!
//! Failures raised by `KeyValueStore` implementations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying filesystem failure (e.g. disk full, permission denied)
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot address
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Backend refused the write because it would exceed its capacity
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A specialized Result type for storage adapters.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
