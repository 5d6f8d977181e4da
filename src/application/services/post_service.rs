//! Post use cases: listing, lookup, creation, update and deletion.

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostInput, PostPatch, PostStatus};
use crate::domain::repositories::PostRepository;
use crate::domain::validation::{ValidationMode, validate_post};
use crate::error::AppError;

const POST_NOT_FOUND: &str = "Post not found";

/// Service orchestrating post operations.
///
/// Each write runs: existence check, validation, one repository call.
pub struct PostService<P: PostRepository> {
    repository: Arc<P>,
}

impl<P: PostRepository> PostService<P> {
    /// Creates a new post service.
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Returns all posts in insertion order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a single post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    pub async fn get_post(&self, id: &str) -> Result<Post, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))
    }

    /// Validates and stores a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with every violation joined by `", "`.
    pub async fn create_post(&self, input: PostInput) -> Result<Post, AppError> {
        let violations = validate_post(&input, ValidationMode::Create);
        if !violations.is_empty() {
            return Err(AppError::from_violations(&violations));
        }

        let new_post = NewPost {
            title: input.title.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
            author_name: input.author_name.unwrap_or_default(),
            status: parse_status(input.status.flatten().as_deref())?,
        };

        let post = self.repository.create(new_post).await?;
        tracing::debug!(post_id = %post.id, "Post created");

        Ok(post)
    }

    /// Applies a partial update to an existing post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] before any validation if the post does not exist.
    /// Returns [`AppError::Validation`] if a provided field breaks its rule.
    pub async fn update_post(&self, id: &str, input: PostInput) -> Result<Post, AppError> {
        self.get_post(id).await?;

        let violations = validate_post(&input, ValidationMode::Update);
        if !violations.is_empty() {
            return Err(AppError::from_violations(&violations));
        }

        let patch = PostPatch {
            status: parse_status(input.status.flatten().as_deref())?,
            title: input.title,
            content: input.content,
            author_name: input.author_name,
        };

        let post = self.repository.update(id, patch).await?;
        tracing::debug!(post_id = %post.id, "Post updated");

        Ok(post)
    }

    /// Deletes a post and all of its comments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            tracing::debug!(post_id = %id, "Delete requested for unknown post");
            return Err(AppError::not_found(POST_NOT_FOUND));
        }

        tracing::debug!(post_id = %id, "Post deleted with its comments");
        Ok(())
    }
}

/// Converts an already validated status string.
fn parse_status(status: Option<&str>) -> Result<Option<PostStatus>, AppError> {
    status
        .map(|s| {
            s.parse::<PostStatus>()
                .map_err(|e| AppError::validation(e.to_string()))
        })
        .transpose()
}
