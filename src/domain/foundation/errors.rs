//! Error types for the domain layer.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' exceeds maximum length of {max}")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Not found errors
    UserNotFound,
    PostNotFound,
    SubscriptionNotFound,

    // State errors
    InvalidStateTransition,
    AccountAlreadyActive,
    SubscriptionConflict,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // External service errors
    PaymentFailed,
    SmsDeliveryFailed,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::PostNotFound => "POST_NOT_FOUND",
            ErrorCode::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::AccountAlreadyActive => "ACCOUNT_ALREADY_ACTIVE",
            ErrorCode::SubscriptionConflict => "SUBSCRIPTION_CONFLICT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::PaymentFailed => "PAYMENT_FAILED",
            ErrorCode::SmsDeliveryFailed => "SMS_DELIVERY_FAILED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let mut err = Self::new(ErrorCode::ValidationFailed, message);
        err.details.insert("field".to_string(), field);
        err
    }

    /// Attaches a detail key/value to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::TooLong { .. } => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let err = DomainError::new(ErrorCode::PostNotFound, "no such post");
        let s = err.to_string();
        assert!(s.contains("POST_NOT_FOUND"));
        assert!(s.contains("no such post"));
    }

    #[test]
    fn validation_error_converts_with_matching_code() {
        let err: DomainError = ValidationError::empty_field("phone").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(err.message().contains("phone"));
    }

    #[test]
    fn with_detail_attaches_values() {
        let err = DomainError::new(ErrorCode::DatabaseError, "save failed")
            .with_detail("table", "subscriptions");
        assert_eq!(err.details.get("table").map(String::as_str), Some("subscriptions"));
    }
}
