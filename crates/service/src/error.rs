//! Typed error enum for the service layer.

use snipbin_storage::StorageError;
use thiserror::Error;

/// Service-layer error, mapped onto HTTP status codes by the API crate.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (empty content).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Thread is locked; no further messages accepted.
    #[error("thread '{0}' is locked")]
    ThreadLocked(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }
}
