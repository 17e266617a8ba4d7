//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// User-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// User was not found.
    NotFound(UserId),

    /// A user with this phone number already exists.
    PhoneTaken(String),

    /// A user with this email already exists.
    EmailTaken(String),

    /// Confirmation code is wrong or no confirmation is pending.
    InvalidConfirmationCode,

    /// The account has already been confirmed.
    AlreadyActive(UserId),

    /// Password does not meet the minimum requirements.
    WeakPassword(String),

    /// SMS delivery failed.
    SmsDeliveryFailed { reason: String },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }

    pub fn phone_taken(phone: impl Into<String>) -> Self {
        UserError::PhoneTaken(phone.into())
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        UserError::EmailTaken(email.into())
    }

    pub fn invalid_confirmation_code() -> Self {
        UserError::InvalidConfirmationCode
    }

    pub fn already_active(id: UserId) -> Self {
        UserError::AlreadyActive(id)
    }

    pub fn weak_password(reason: impl Into<String>) -> Self {
        UserError::WeakPassword(reason.into())
    }

    pub fn sms_delivery_failed(reason: impl Into<String>) -> Self {
        UserError::SmsDeliveryFailed {
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::PhoneTaken(_) | UserError::EmailTaken(_) => ErrorCode::ValidationFailed,
            UserError::InvalidConfirmationCode => ErrorCode::ValidationFailed,
            UserError::AlreadyActive(_) => ErrorCode::AccountAlreadyActive,
            UserError::WeakPassword(_) => ErrorCode::ValidationFailed,
            UserError::SmsDeliveryFailed { .. } => ErrorCode::SmsDeliveryFailed,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(id) => format!("User not found: {}", id),
            UserError::PhoneTaken(phone) => {
                format!("A user with phone number {} already exists", phone)
            }
            UserError::EmailTaken(email) => format!("A user with email {} already exists", email),
            UserError::InvalidConfirmationCode => "Invalid confirmation code".to_string(),
            UserError::AlreadyActive(_) => "Account is already confirmed".to_string(),
            UserError::WeakPassword(reason) => reason.clone(),
            UserError::SmsDeliveryFailed { reason } => {
                format!("Could not deliver confirmation SMS: {}", reason)
            }
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<crate::domain::foundation::ValidationError> for UserError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        UserError::from(DomainError::from(err))
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                UserError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

impl From<UserError> for DomainError {
    fn from(err: UserError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
