//! SMS delivery configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Which SMS adapter handles confirmation codes
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Log codes instead of sending them (development)
    #[default]
    Console,
    /// Send real messages through Twilio
    Twilio,
}

/// SMS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmsConfig {
    /// Delivery provider to use
    #[serde(default)]
    pub provider: SmsProvider,

    /// Twilio account SID
    #[serde(default)]
    pub twilio_account_sid: String,

    /// Twilio auth token
    #[serde(default)]
    pub twilio_auth_token: String,

    /// Sender phone number in E.164 format
    #[serde(default)]
    pub twilio_from_number: String,
}

impl SmsConfig {
    /// Validate SMS configuration
    ///
    /// Twilio credentials are only required when the twilio provider is
    /// selected; the console provider needs nothing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == SmsProvider::Twilio
            && (self.twilio_account_sid.is_empty()
                || self.twilio_auth_token.is_empty()
                || self.twilio_from_number.is_empty())
        {
            return Err(ValidationError::MissingTwilioCredentials);
        }
        Ok(())
    }
}
