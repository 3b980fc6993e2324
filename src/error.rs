//! Error Types

use thiserror::Error;

/// Failures of the key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Vote operations rejected by the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("unknown catalog item: {0}")]
    UnknownItem(String),
    #[error("vote store is no longer available")]
    Disposed,
}
