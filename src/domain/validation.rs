//! Field rules for post and comment payloads.
//!
//! Validators are pure: they take a candidate payload and return the ordered
//! list of violations. An empty list means the payload is valid.
//!
//! | Field               | Rule              |
//! |---------------------|-------------------|
//! | post `title`        | 5-200 characters  |
//! | post `content`      | at least 10       |
//! | `authorName`        | 2-100 characters  |
//! | comment `content`   | 1-1000 characters |
//! | post `status`       | `draft` or `published` |
//!
//! Lengths are counted in characters, not bytes.

use validator::ValidateLength;

use crate::domain::entities::{CommentInput, PostInput, PostStatus};

pub const TITLE_MIN: u64 = 5;
pub const TITLE_MAX: u64 = 200;
pub const POST_CONTENT_MIN: u64 = 10;
pub const AUTHOR_NAME_MIN: u64 = 2;
pub const AUTHOR_NAME_MAX: u64 = 100;
pub const COMMENT_CONTENT_MIN: u64 = 1;
pub const COMMENT_CONTENT_MAX: u64 = 1000;

/// Whether absent fields are violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every required field must be present and non-empty.
    Create,
    /// Fields are optional; present ones must still satisfy their rule.
    Update,
}

/// Length bounds for a single string field.
struct LengthRule {
    field: &'static str,
    min: u64,
    max: Option<u64>,
}

impl LengthRule {
    const fn new(field: &'static str, min: u64, max: Option<u64>) -> Self {
        Self { field, min, max }
    }

    fn check(&self, value: Option<&str>, mode: ValidationMode, errors: &mut Vec<String>) {
        let value = match (value, mode) {
            (None, ValidationMode::Update) => return,
            (None, ValidationMode::Create) => {
                errors.push(format!("{} is required", self.field));
                return;
            }
            (Some(""), ValidationMode::Create) => {
                errors.push(format!("{} is required", self.field));
                return;
            }
            (Some(value), _) => value,
        };

        if !value.validate_length(Some(self.min), None, None) {
            let unit = if self.min == 1 { "character" } else { "characters" };
            errors.push(format!(
                "{} must be at least {} {}",
                self.field, self.min, unit
            ));
        }

        if let Some(max) = self.max
            && !value.validate_length(None, Some(max), None)
        {
            errors.push(format!("{} must not exceed {} characters", self.field, max));
        }
    }
}

const TITLE: LengthRule = LengthRule::new("title", TITLE_MIN, Some(TITLE_MAX));
const POST_CONTENT: LengthRule = LengthRule::new("content", POST_CONTENT_MIN, None);
const AUTHOR_NAME: LengthRule = LengthRule::new("authorName", AUTHOR_NAME_MIN, Some(AUTHOR_NAME_MAX));
const COMMENT_CONTENT: LengthRule =
    LengthRule::new("content", COMMENT_CONTENT_MIN, Some(COMMENT_CONTENT_MAX));

/// Validates a post payload.
///
/// Fields are checked in the order title, content, authorName, status.
pub fn validate_post(input: &PostInput, mode: ValidationMode) -> Vec<String> {
    let mut errors = Vec::new();

    TITLE.check(input.title.as_deref(), mode, &mut errors);
    POST_CONTENT.check(input.content.as_deref(), mode, &mut errors);
    AUTHOR_NAME.check(input.author_name.as_deref(), mode, &mut errors);

    // A present status, null included, must name a known status
    if let Some(status) = &input.status
        && status
            .as_deref()
            .is_none_or(|s| s.parse::<PostStatus>().is_err())
    {
        errors.push(r#"status must be either "draft" or "published""#.to_string());
    }

    errors
}

/// Validates a comment payload. Comments can only be created, so every field is required.
pub fn validate_comment(input: &CommentInput) -> Vec<String> {
    let mut errors = Vec::new();

    AUTHOR_NAME.check(
        input.author_name.as_deref(),
        ValidationMode::Create,
        &mut errors,
    );
    COMMENT_CONTENT.check(input.content.as_deref(), ValidationMode::Create, &mut errors);

    errors
}
