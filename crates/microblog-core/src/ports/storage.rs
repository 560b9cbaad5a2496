use async_trait::async_trait;

use crate::error::StorageError;

/// Persistent key-value store - string keys to string values.
///
/// Backends decide durability and quota; callers only see get/set.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`. The write is complete when this returns.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
