//! DTOs for comment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Comment, CommentInput};

/// JSON representation of a comment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentItem {
    pub id: String,
    pub post_id: String,
    pub author_name: String,
    pub content: String,
    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentItem {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author_name: comment.author_name,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Request body for `POST /api/posts/{id}/comments`.
///
/// The post id always comes from the path; `id` and `postId` in the body are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub author_name: Option<String>,
    pub content: Option<String>,
}

impl From<CommentPayload> for CommentInput {
    fn from(payload: CommentPayload) -> Self {
        Self {
            author_name: payload.author_name,
            content: payload.content,
        }
    }
}
