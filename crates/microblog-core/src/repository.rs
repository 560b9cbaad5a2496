//! Post repository over the storage adapter.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};

use crate::domain::{NewPost, Post, PostCollection, PostId};
use crate::error::RepoError;
use crate::ports::{KeyValueStore, PostRepository};
use crate::storage::StorageAdapter;

/// `PostRepository` backed by any `KeyValueStore`.
///
/// There is no isolation between the read and the write of a mutation, so
/// two concurrent writers may lose an update.
#[derive(Clone)]
pub struct StoredPostRepository {
    storage: StorageAdapter,
}

impl StoredPostRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage: StorageAdapter::new(store),
        }
    }

    pub fn storage(&self) -> &StorageAdapter {
        &self.storage
    }
}

#[async_trait]
impl PostRepository for StoredPostRepository {
    async fn list(&self) -> Result<PostCollection, RepoError> {
        Ok(self
            .storage
            .load_posts()
            .await?
            .unwrap_or_else(|| PostCollection::seeded(Utc::now())))
    }

    async fn add(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut posts = self.list().await?;
        let id = posts
            .next_id()
            .ok_or(RepoError::IdsExhausted(PostId::MAX))?;
        // Stored dates carry millisecond precision.
        let post = Post::new(id, draft, Utc::now().trunc_subsecs(3));

        posts.prepend(post.clone());
        self.storage.save_posts(&posts).await?;

        tracing::debug!(post_id = post.id, total = posts.len(), "Post added");
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> Result<PostCollection, RepoError> {
        let mut posts = self.list().await?;
        let removed = posts.remove(id);
        self.storage.save_posts(&posts).await?;

        tracing::debug!(post_id = id, removed, remaining = posts.len(), "Post deleted");
        Ok(posts)
    }
}
