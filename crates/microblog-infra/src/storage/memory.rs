//! In-memory store - used when no data file is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use microblog_core::StorageError;
use microblog_core::ports::KeyValueStore;

use super::check_quota;

/// In-memory key-value store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    /// Limit the total size of keys and values to `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;
        check_quota(&store, key, value, self.quota)?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), Some("value1".to_string()));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quota_counts_replacement_not_sum() {
        let store = InMemoryStore::new().with_quota(10);
        store.set("k", "123456789").await.unwrap();
        // Overwrite of the same key fits again.
        store.set("k", "987654321").await.unwrap();

        let err = store.set("k2", "x").await.unwrap_err();
        assert_eq!(
            err,
            StorageError::QuotaExceeded {
                key: "k2".to_string(),
                requested: 13,
                quota: 10,
            }
        );
        assert_eq!(store.get("k2").await.unwrap(), None);
    }
}
