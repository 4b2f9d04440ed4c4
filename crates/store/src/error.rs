use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The record exists but is in the wrong state for the operation.
    #[error("conflict: {0}")]
    Conflict(String),
}
