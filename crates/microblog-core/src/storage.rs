//! Storage adapter - the two keys MicroBlog keeps in the key-value store.

use std::sync::Arc;

use crate::domain::{Post, PostCollection};
use crate::error::{RepoError, StorageError};
use crate::ports::KeyValueStore;

/// Key holding the JSON-serialized post collection.
pub const POSTS_KEY: &str = "microblog-posts";

/// Key holding the last author name used on the submission form.
pub const AUTHOR_KEY: &str = "authorName";

/// Typed access to the post collection and the cached author name.
#[derive(Clone)]
pub struct StorageAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl StorageAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored collection, or `None` if nothing was ever saved.
    pub async fn load_posts(&self) -> Result<Option<PostCollection>, RepoError> {
        match self.store.get(POSTS_KEY).await? {
            Some(raw) => decode_posts(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn save_posts(&self, posts: &PostCollection) -> Result<(), RepoError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| RepoError::Serialization(e.to_string()))?;
        self.store.set(POSTS_KEY, &raw).await?;
        Ok(())
    }

    /// Last author used for a submission. An empty stored value counts as unset.
    pub async fn last_author(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .store
            .get(AUTHOR_KEY)
            .await?
            .filter(|author| !author.is_empty()))
    }

    pub async fn remember_author(&self, author: &str) -> Result<(), StorageError> {
        self.store.set(AUTHOR_KEY, author).await
    }
}

/// Decode the stored collection.
///
/// A value that is not a JSON array is rejected as corrupt. Inside the array,
/// records that do not carry every `Post` field are dropped.
pub fn decode_posts(raw: &str) -> Result<PostCollection, RepoError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| RepoError::Corrupt(e.to_string()))?;

    let total = records.len();
    let posts: Vec<Post> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();

    if posts.len() < total {
        tracing::warn!(
            dropped = total - posts.len(),
            kept = posts.len(),
            "Dropped malformed post records"
        );
    }

    Ok(PostCollection::new(posts))
}
