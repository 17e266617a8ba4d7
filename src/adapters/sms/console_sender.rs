//! Console SMS sender for development.

use async_trait::async_trait;

use crate::domain::user::{ConfirmationToken, PhoneNumber};
use crate::ports::{DeliveryReceipt, SmsError, SmsSender};

/// Development implementation of the SmsSender port.
///
/// Logs the confirmation code instead of sending it. Never fails, so the
/// registration flow is fully exercisable without a provider account.
#[derive(Default)]
pub struct ConsoleSmsSender;

impl ConsoleSmsSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsSender for ConsoleSmsSender {
    async fn send_confirmation_code(
        &self,
        token: &ConfirmationToken,
        phone: &PhoneNumber,
    ) -> Result<DeliveryReceipt, SmsError> {
        tracing::info!(
            phone = %phone.to_e164(),
            code = %token,
            "Confirmation code (console delivery)"
        );
        Ok(DeliveryReceipt {
            message_id: format!("console-{}", phone),
        })
    }
}
