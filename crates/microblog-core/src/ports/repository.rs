use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostCollection, PostId};
use crate::error::RepoError;

/// Post repository. Every operation reads the full collection, and the
/// mutating ones write the full collection back.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first. Yields the unsaved seed collection when the
    /// store is empty.
    async fn list(&self) -> Result<PostCollection, RepoError>;

    /// Assign the next id, stamp the current instant, prepend and persist.
    async fn add(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// Remove every post with `id` and persist. A missing id is a no-op.
    async fn delete(&self, id: PostId) -> Result<PostCollection, RepoError>;
}
