//! Key-value store implementations - JSON file and in-memory fallback.

mod file;
mod memory;

use std::collections::HashMap;

use microblog_core::StorageError;

pub use file::FileStore;
pub use memory::InMemoryStore;

/// Default capacity, matching the usual browser local-storage limit.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Fail with `QuotaExceeded` if replacing `key` with `value` would push the
/// total size of keys and values past `quota`.
fn check_quota(
    entries: &HashMap<String, String>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> Result<(), StorageError> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let others: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    let requested = others + key.len() + value.len();

    if requested > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            requested,
            quota,
        });
    }
    Ok(())
}
