//! # ServiceError
//!
//! Errors the session and gateway surface to the front end.

use domains::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The storage backend rejected a read or write.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StorageError),

    /// A document could not be encoded or decoded.
    #[error("invalid state document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A document decoded but breaks a state invariant.
    #[error("invalid state document: {0}")]
    InvalidDocument(String),

    /// An admin operation was attempted without a successful login.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
