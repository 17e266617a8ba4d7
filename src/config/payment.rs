//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Stripe API key
    pub stripe_api_key: String,

    /// Where the hosted checkout sends the buyer after paying
    #[serde(default = "default_success_url")]
    pub success_url: String,

    /// ISO currency code for prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !self.success_url.starts_with("http://") && !self.success_url.starts_with("https://") {
            return Err(ValidationError::InvalidSuccessUrl);
        }
        Ok(())
    }
}

fn default_success_url() -> String {
    "http://127.0.0.1:8000/subscription/success".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}
