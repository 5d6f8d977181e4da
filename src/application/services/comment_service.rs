//! Comment use cases: listing per post, creation and deletion.

use std::sync::Arc;

use crate::domain::entities::{Comment, CommentInput, NewComment};
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::domain::validation::validate_comment;
use crate::error::AppError;

/// Service orchestrating comment operations.
///
/// Needs the post repository to confirm that the parent post exists before
/// touching its comments.
pub struct CommentService<C: CommentRepository, P: PostRepository> {
    comment_repository: Arc<C>,
    post_repository: Arc<P>,
}

impl<C: CommentRepository, P: PostRepository> CommentService<C, P> {
    /// Creates a new comment service.
    pub fn new(comment_repository: Arc<C>, post_repository: Arc<P>) -> Self {
        Self {
            comment_repository,
            post_repository,
        }
    }

    async fn ensure_post_exists(&self, post_id: &str) -> Result<(), AppError> {
        match self.post_repository.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Post not found")),
        }
    }

    /// Returns the comments of a post in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, AppError> {
        self.ensure_post_exists(post_id).await?;
        self.comment_repository.find_by_post_id(post_id).await
    }

    /// Validates and stores a new comment on a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist, even when the
    /// payload is also invalid.
    /// Returns [`AppError::Validation`] with every violation joined by `", "`.
    pub async fn create_comment(
        &self,
        post_id: &str,
        input: CommentInput,
    ) -> Result<Comment, AppError> {
        self.ensure_post_exists(post_id).await?;

        let violations = validate_comment(&input);
        if !violations.is_empty() {
            return Err(AppError::from_violations(&violations));
        }

        let new_comment = NewComment {
            post_id: post_id.to_string(),
            author_name: input.author_name.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
        };

        let comment = self.comment_repository.create(new_comment).await?;
        tracing::debug!(comment_id = %comment.id, post_id, "Comment created");

        Ok(comment)
    }

    /// Deletes a single comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no comment has this id.
    pub async fn delete_comment(&self, id: &str) -> Result<(), AppError> {
        if !self.comment_repository.delete(id).await? {
            return Err(AppError::not_found("Comment not found"));
        }

        tracing::debug!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}
