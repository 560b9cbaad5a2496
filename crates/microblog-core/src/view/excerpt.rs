use std::fmt;

/// Maximum number of characters kept in a post summary.
pub const EXCERPT_CHARS: usize = 150;

/// Summary of a post body for list cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub text: String,
    pub truncated: bool,
}

impl Excerpt {
    pub fn of(content: &str) -> Self {
        match content.char_indices().nth(EXCERPT_CHARS) {
            Some((cut, _)) => Self {
                text: content[..cut].to_string(),
                truncated: true,
            },
            None => Self {
                text: content.to_string(),
                truncated: false,
            },
        }
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.truncated {
            f.write_str("...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_limit_is_not_truncated() {
        let content = "a".repeat(EXCERPT_CHARS);
        let excerpt = Excerpt::of(&content);
        assert!(!excerpt.truncated);
        assert_eq!(excerpt.to_string(), content);
    }

    #[test]
    fn test_longer_content_is_marked() {
        let content = "b".repeat(EXCERPT_CHARS + 1);
        let excerpt = Excerpt::of(&content);
        assert!(excerpt.truncated);
        assert_eq!(excerpt.text.chars().count(), EXCERPT_CHARS);
        assert!(excerpt.to_string().ends_with("b..."));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let content = "é".repeat(EXCERPT_CHARS);
        assert!(!Excerpt::of(&content).truncated);
    }
}
