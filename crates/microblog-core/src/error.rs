//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Faults raised by a key-value store backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: writing {requested} bytes to '{key}' exceeds the {quota} byte limit")]
    QuotaExceeded {
        key: String,
        requested: usize,
        quota: usize,
    },

    #[error("Storage I/O failed: {0}")]
    Io(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored collection could not be read as a list of posts at all.
    #[error("Stored posts are corrupt: {0}")]
    Corrupt(String),

    #[error("No post id left after {0}")]
    IdsExhausted(PostId),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
