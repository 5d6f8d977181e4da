//! Post entity and its creation/update inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub const ALL: [PostStatus; 2] = [PostStatus::Draft, PostStatus::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for PostStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Applies the provided fields of `patch` and stamps `updated_at`.
    ///
    /// `id` and `created_at` are not part of [`PostPatch`] and never change.
    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author_name) = patch.author_name {
            self.author_name = author_name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

/// Input data for creating a new post. A missing status means draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub status: Option<PostStatus>,
}

/// Partial update for an existing post.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub status: Option<PostStatus>,
}

/// Unvalidated post fields as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_name: Option<String>,
    /// Absent = `None`, explicit `null` = `Some(None)`.
    pub status: Option<Option<String>>,
}
