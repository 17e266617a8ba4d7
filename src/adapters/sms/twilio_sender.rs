//! Twilio SMS sender adapter.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::user::{ConfirmationToken, PhoneNumber};
use crate::ports::{DeliveryReceipt, SmsError, SmsSender};

/// Twilio API configuration.
#[derive(Clone)]
pub struct TwilioConfig {
    /// Account SID (AC...).
    account_sid: String,

    /// Auth token for basic auth.
    auth_token: SecretString,

    /// Sender number in E.164 form.
    from_number: String,

    /// Base URL for the Twilio API (default: https://api.twilio.com).
    api_base_url: String,
}

impl TwilioConfig {
    /// Create a new Twilio configuration.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: SecretString::new(auth_token.into()),
            from_number: from_number.into(),
            api_base_url: "https://api.twilio.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Twilio implementation of the SmsSender port.
pub struct TwilioSmsSender {
    config: TwilioConfig,
    http_client: reqwest::Client,
}

impl TwilioSmsSender {
    /// Create a new sender with the given configuration.
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioError {
    code: Option<i64>,
    message: Option<String>,
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_confirmation_code(
        &self,
        token: &ConfirmationToken,
        phone: &PhoneNumber,
    ) -> Result<DeliveryReceipt, SmsError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base_url, self.config.account_sid
        );

        let body = format!("Your confirmation code: {}", token);
        let params = [
            ("To", phone.to_e164()),
            ("From", self.config.from_number.clone()),
            ("Body", body),
        ];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.account_sid,
                Some(self.config.auth_token.expose_secret()),
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| SmsError::new(e.to_string()))?;

        if !response.status().is_success() {
            let error: TwilioError = response
                .json()
                .await
                .unwrap_or(TwilioError {
                    code: None,
                    message: None,
                });
            tracing::error!(
                code = ?error.code,
                message = ?error.message,
                "Twilio message send failed"
            );
            let mut err = SmsError::new(
                error
                    .message
                    .unwrap_or_else(|| "Twilio rejected the message".to_string()),
            );
            if let Some(code) = error.code {
                err = err.with_provider_code(code.to_string());
            }
            return Err(err);
        }

        let message: TwilioMessage = response
            .json()
            .await
            .map_err(|e| SmsError::new(format!("Failed to parse Twilio response: {}", e)))?;

        tracing::debug!(message_sid = %message.sid, "Confirmation SMS accepted by Twilio");

        Ok(DeliveryReceipt {
            message_id: message.sid,
        })
    }
}
