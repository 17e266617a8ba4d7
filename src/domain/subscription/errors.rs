//! Subscription-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | ActiveSubscriptionExists | 400 |
//! | AlreadyPaid | 409 |
//! | UnknownPlan | 400 |
//! | PaymentFailed | 502 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId};

/// Subscription-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Subscription was not found (or is not owned by the requester).
    NotFound(SubscriptionId),

    /// User already holds an active, paid subscription.
    ActiveSubscriptionExists(UserId),

    /// The record has already been paid.
    AlreadyPaid(SubscriptionId),

    /// Unrecognized plan identifier.
    UnknownPlan(String),

    /// Payment provider call failed.
    PaymentFailed { reason: String },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound(id)
    }

    pub fn active_subscription_exists(user_id: UserId) -> Self {
        SubscriptionError::ActiveSubscriptionExists(user_id)
    }

    pub fn already_paid(id: SubscriptionId) -> Self {
        SubscriptionError::AlreadyPaid(id)
    }

    pub fn unknown_plan(plan: impl Into<String>) -> Self {
        SubscriptionError::UnknownPlan(plan.into())
    }

    pub fn payment_failed(reason: impl Into<String>) -> Self {
        SubscriptionError::PaymentFailed {
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::NotFound(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::ActiveSubscriptionExists(_) => ErrorCode::SubscriptionConflict,
            SubscriptionError::AlreadyPaid(_) => ErrorCode::InvalidStateTransition,
            SubscriptionError::UnknownPlan(_) => ErrorCode::ValidationFailed,
            SubscriptionError::PaymentFailed { .. } => ErrorCode::PaymentFailed,
            SubscriptionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SubscriptionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::NotFound(id) => format!("Subscription not found: {}", id),
            SubscriptionError::ActiveSubscriptionExists(_) => {
                "You already have an active subscription and cannot purchase another".to_string()
            }
            SubscriptionError::AlreadyPaid(id) => {
                format!("Subscription {} has already been paid", id)
            }
            SubscriptionError::UnknownPlan(plan) => {
                format!("Unknown subscription plan: '{}'", plan)
            }
            SubscriptionError::PaymentFailed { reason } => {
                format!("Payment failed: {}", reason)
            }
            SubscriptionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SubscriptionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                SubscriptionError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::PaymentFailed => SubscriptionError::PaymentFailed {
                reason: err.message,
            },
            _ => SubscriptionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
