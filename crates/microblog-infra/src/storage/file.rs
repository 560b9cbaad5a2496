//! JSON-file store - one object mapping keys to string values.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use microblog_core::StorageError;
use microblog_core::ports::KeyValueStore;

use super::check_quota;

/// Durable key-value store backed by a single JSON file.
///
/// The file is read on first access and rewritten in full on every `set`,
/// through a temporary file that is renamed into place.
pub struct FileStore {
    path: PathBuf,
    quota: Option<usize>,
    entries: RwLock<Option<HashMap<String, String>>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota: None,
            entries: RwLock::new(None),
        }
    }

    /// Limit the total size of keys and values to `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    async fn read_file(&self) -> Result<HashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                StorageError::Unavailable(format!(
                    "{} is not a valid store file: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Store file absent, starting empty");
                Ok(HashMap::new())
            }
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn write_file(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let raw = serde_json::to_string(entries).map_err(|e| StorageError::Io(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        {
            let entries = self.entries.read().await;
            if let Some(entries) = entries.as_ref() {
                return Ok(entries.get(key).cloned());
            }
        }

        let mut entries = self.entries.write().await;
        if entries.is_none() {
            *entries = Some(self.read_file().await?);
        }
        Ok(entries.as_ref().and_then(|e| e.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.entries.write().await;
        let mut entries = match guard.take() {
            Some(entries) => entries,
            None => self.read_file().await?,
        };

        let result = match check_quota(&entries, key, value, self.quota) {
            Ok(()) => {
                let previous = entries.insert(key.to_string(), value.to_string());
                let written = self.write_file(&entries).await;
                if written.is_err() {
                    // Keep memory in line with what is on disk.
                    match previous {
                        Some(previous) => entries.insert(key.to_string(), previous),
                        None => entries.remove(key),
                    };
                }
                written
            }
            Err(e) => Err(e),
        };

        *guard = Some(entries);
        result
    }
}
