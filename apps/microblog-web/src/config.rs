//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use microblog_infra::DEFAULT_QUOTA_BYTES;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

/// Where posts and the cached author name are kept.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// JSON file backing the store. `None` keeps everything in memory.
    pub data_file: Option<PathBuf>,
    pub quota_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage: StorageConfig {
                data_file: env::var("MICROBLOG_DATA_FILE")
                    .ok()
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
                quota_bytes: env::var("MICROBLOG_STORAGE_QUOTA")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_QUOTA_BYTES),
            },
        }
    }
}
