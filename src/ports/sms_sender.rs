//! SMS sender port for confirmation-code delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::{ConfirmationToken, PhoneNumber};

/// Port for outbound SMS delivery.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a registration confirmation code to the given number.
    async fn send_confirmation_code(
        &self,
        token: &ConfirmationToken,
        phone: &PhoneNumber,
    ) -> Result<DeliveryReceipt, SmsError>;
}

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider's message id.
    pub message_id: String,
}

/// Errors from SMS delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsError {
    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,
}

impl SmsError {
    /// Create a new SMS error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            provider_code: None,
        }
    }

    /// Attach the provider's own error code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }
}

impl std::fmt::Display for SmsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SmsError {}

impl From<SmsError> for DomainError {
    fn from(err: SmsError) -> Self {
        DomainError::new(ErrorCode::SmsDeliveryFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sms_sender_is_object_safe() {
        fn _accepts_dyn(_sender: &dyn SmsSender) {}
    }

    #[test]
    fn sms_error_converts_to_domain_error() {
        let err = SmsError::new("number unreachable").with_provider_code("21211");
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::SmsDeliveryFailed);
    }
}
