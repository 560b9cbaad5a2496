use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// Post entity - a single blog entry.
///
/// Posts are never edited after creation; the only lifecycle events are
/// creation through the submission view and explicit deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

/// Fields supplied by the submitter. Taken verbatim: no trimming, no caps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl Post {
    pub const SEED_TITLE: &'static str = "Getting Started with MicroBlog";
    const SEED_AUTHOR: &'static str = "Admin";
    const SEED_CONTENT: &'static str = "This is a simple blogging platform that works entirely in your browser. All posts are stored in localStorage.";

    /// Create a post from submitted fields.
    pub fn new(id: PostId, draft: NewPost, date: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            date,
        }
    }

    /// The example post shown when nothing has been stored yet.
    pub fn seed(date: DateTime<Utc>) -> Self {
        Self {
            id: 1,
            title: Self::SEED_TITLE.to_string(),
            content: Self::SEED_CONTENT.to_string(),
            author: Self::SEED_AUTHOR.to_string(),
            date,
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix,
/// e.g. `2024-03-01T09:30:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_serializes_with_millis() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let post = Post::seed(date);

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["date"], "2024-03-01T09:30:00.000Z");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_new_keeps_fields_verbatim() {
        let draft = NewPost {
            title: "  spaced  ".to_string(),
            author: String::new(),
            content: "body".to_string(),
        };
        let post = Post::new(7, draft, Utc::now());

        assert_eq!(post.title, "  spaced  ");
        assert_eq!(post.author, "");
        assert_eq!(post.id, 7);
    }
}
