use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::excerpt::Excerpt;
use crate::domain::{Post, PostId};

/// Call-to-action shown when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No posts yet.";
pub const EMPTY_CTA_LABEL: &str = "Create the first post!";

/// Where the empty state's call-to-action points.
pub const NEW_POST_HREF: &str = "/new";

/// What the list view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty,
    Populated(Vec<PostCard>),
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty)
    }

    pub fn cards(&self) -> &[PostCard] {
        match self {
            ListView::Empty => &[],
            ListView::Populated(cards) => cards,
        }
    }
}

/// Summary card for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub date: String,
    pub excerpt: Excerpt,
    /// Deleted, waiting for the fade-out to finish before removal.
    pub fading: bool,
}

impl PostCard {
    pub fn new(post: &Post, fading: bool) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            author: post.author.clone(),
            date: format_date(&post.date),
            excerpt: Excerpt::of(&post.content),
            fading,
        }
    }
}

/// Cards in the given order, which is newest first for stored collections.
pub fn render_list(posts: &[Post], fading: &HashSet<PostId>) -> ListView {
    if posts.is_empty() {
        return ListView::Empty;
    }

    ListView::Populated(
        posts
            .iter()
            .map(|post| PostCard::new(post, fading.contains(&post.id)))
            .collect(),
    )
}

/// Short date, e.g. `Jan 5, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
