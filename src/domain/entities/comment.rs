//! Comment entity.

use chrono::{DateTime, Utc};

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Returns true if the comment belongs to the given post.
    pub fn belongs_to(&self, post_id: &str) -> bool {
        self.post_id == post_id
    }
}

/// Input data for creating a new comment. The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub post_id: String,
    pub author_name: String,
    pub content: String,
}

/// Unvalidated comment fields as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentInput {
    pub author_name: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to() {
        let comment = Comment {
            id: "7".to_string(),
            post_id: "3".to_string(),
            author_name: "Reader".to_string(),
            content: "Nice".to_string(),
            created_at: Utc::now(),
        };

        assert!(comment.belongs_to("3"));
        assert!(!comment.belongs_to("30"));
    }
}
