//! DTOs for post endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, PostInput, PostStatus};

/// JSON representation of a post.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub status: PostStatus,
    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostItem {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_name: post.author_name,
            status: post.status,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Request body for `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Every field is optional at this layer. Which ones are required depends on
/// the operation and is decided by the validators. `status` stays a plain
/// string so that an unknown value becomes a field violation, not a parse error.
/// Unknown keys such as `id` or `createdAt` are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_name: Option<String>,

    /// Absent = not provided, null = provided but invalid.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub status: Option<Option<String>>,
}

impl From<PostPayload> for PostInput {
    fn from(payload: PostPayload) -> Self {
        Self {
            title: payload.title,
            content: payload.content,
            author_name: payload.author_name,
            status: payload.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_post_item_shape() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let item = PostItem::from(Post {
            id: "1".to_string(),
            title: "Hello World".to_string(),
            content: "This is long enough.".to_string(),
            author_name: "Jo".to_string(),
            status: PostStatus::Draft,
            created_at: created,
            updated_at: created,
        });

        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({
                "id": "1",
                "title": "Hello World",
                "content": "This is long enough.",
                "authorName": "Jo",
                "status": "draft",
                "createdAt": "2024-01-15T10:00:00.000Z",
                "updatedAt": "2024-01-15T10:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_payload_ignores_immutable_fields() {
        let payload: PostPayload = serde_json::from_value(json!({
            "id": "999",
            "createdAt": "2000-01-01T00:00:00.000Z",
            "authorName": "Jo",
        }))
        .unwrap();

        let input = PostInput::from(payload);
        assert_eq!(input.author_name.as_deref(), Some("Jo"));
        assert!(input.title.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn test_payload_keeps_explicit_null_status() {
        let payload: PostPayload = serde_json::from_value(json!({ "status": null })).unwrap();
        assert_eq!(payload.status, Some(None));

        let payload: PostPayload = serde_json::from_value(json!({ "status": "draft" })).unwrap();
        assert_eq!(payload.status, Some(Some("draft".to_string())));
    }
}
