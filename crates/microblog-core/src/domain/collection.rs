use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::{Post, PostId};

/// Ordered posts, newest first. The whole collection is the unit of
/// persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Single-element collection holding the example post.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(vec![Post::seed(now)])
    }

    /// Largest id plus one, or 1 for an empty collection. `None` once the
    /// largest id is `PostId::MAX`.
    pub fn next_id(&self) -> Option<PostId> {
        match self.posts.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    /// Remove every post carrying `id`. Returns how many were removed.
    pub fn remove(&mut self, id: PostId) -> usize {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        before - self.posts.len()
    }

    pub fn first(&self) -> Option<&Post> {
        self.posts.first()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn into_vec(self) -> Vec<Post> {
        self.posts
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn post(id: PostId) -> Post {
        Post::new(
            id,
            NewPost {
                title: format!("post {id}"),
                ..Default::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_next_id_starts_at_one() {
        assert_eq!(PostCollection::default().next_id(), Some(1));
    }

    #[test]
    fn test_next_id_follows_max_not_len() {
        let posts = PostCollection::new(vec![post(2), post(9), post(4)]);
        assert_eq!(posts.next_id(), Some(10));
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        let posts = PostCollection::new(vec![post(1), post(PostId::MAX)]);
        assert_eq!(posts.next_id(), None);
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut posts = PostCollection::new(vec![post(1)]);
        posts.prepend(post(2));
        assert_eq!(posts.first().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_remove_drops_duplicates_and_tolerates_missing() {
        let mut posts = PostCollection::new(vec![post(3), post(3), post(1)]);
        assert_eq!(posts.remove(3), 2);
        assert_eq!(posts.remove(42), 0);
        assert_eq!(posts.len(), 1);
    }
}
