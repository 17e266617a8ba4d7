//! Post-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, PostId};

/// Post-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    /// Post was not found.
    NotFound(PostId),

    /// The requesting user does not own the post.
    Forbidden(PostId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PostError {
    pub fn not_found(id: PostId) -> Self {
        PostError::NotFound(id)
    }

    pub fn forbidden(id: PostId) -> Self {
        PostError::Forbidden(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PostError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PostError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PostError::NotFound(_) => ErrorCode::PostNotFound,
            PostError::Forbidden(_) => ErrorCode::Forbidden,
            PostError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PostError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PostError::NotFound(id) => format!("Post not found: {}", id),
            PostError::Forbidden(_) => "Only the author may modify this post".to_string(),
            PostError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PostError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PostError {}

impl From<DomainError> for PostError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                PostError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => PostError::Infrastructure(err.to_string()),
        }
    }
}

impl From<PostError> for DomainError {
    fn from(err: PostError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
