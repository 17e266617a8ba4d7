//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe HTTP API:
//! a recurring price is created per checkout, then a hosted checkout
//! session is opened against it.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key);
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{
    CheckoutSession, CreatePriceRequest, PaymentError, PaymentErrorCode, PaymentProvider,
    PriceHandle,
};

/// Product name attached to every generated price.
const PRODUCT_NAME: &str = "Subscription";

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// Where the buyer lands after completing checkout.
    success_url: String,

    /// ISO currency code for generated prices.
    currency: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration with defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            success_url: "http://127.0.0.1:8000/subscription/success".to_string(),
            currency: "usd".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the post-checkout success URL.
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = url.into();
        self
    }

    /// Set the currency for generated prices.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Stripe payment provider adapter.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripePrice {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeCheckoutSession {
    id: String,
    url: Option<String>,
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_price(
        &self,
        request: CreatePriceRequest,
    ) -> Result<PriceHandle, PaymentError> {
        let url = format!("{}/v1/prices", self.config.api_base_url);

        let params = [
            ("currency", self.config.currency.clone()),
            ("unit_amount", request.amount_minor_units.to_string()),
            ("recurring[interval]", "month".to_string()),
            (
                "recurring[interval_count]",
                request.interval_months.to_string(),
            ),
            ("product_data[name]", PRODUCT_NAME.to_string()),
        ];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PaymentError::authentication("Stripe rejected the API key"));
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(error = %error_text, "Stripe create_price failed");
            return Err(PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Stripe API error: {}", error_text),
            ));
        }

        let price: StripePrice = response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        Ok(PriceHandle { id: price.id })
    }

    async fn create_checkout_session(
        &self,
        price: &PriceHandle,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let params = [
            ("mode", "subscription".to_string()),
            ("line_items[0][price]", price.id.clone()),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", self.config.success_url.clone()),
        ];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PaymentError::authentication("Stripe rejected the API key"));
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(error = %error_text, "Stripe create_checkout_session failed");
            return Err(PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Stripe API error: {}", error_text),
            ));
        }

        let session: StripeCheckoutSession = response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        // Hosted sessions normally carry their checkout URL; fall back to
        // the canonical pay link when the field is absent.
        let url = session
            .url
            .unwrap_or_else(|| format!("https://checkout.stripe.com/c/pay/{}", &session.id));

        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_sets_defaults() {
        let config = StripeConfig::new("sk_test_key");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.currency, "usd");
        assert!(config.success_url.ends_with("/subscription/success"));
    }

    #[test]
    fn config_with_base_url() {
        let config = StripeConfig::new("sk_test_key").with_base_url("http://localhost:8080");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn config_with_success_url_and_currency() {
        let config = StripeConfig::new("sk_test_key")
            .with_success_url("https://example.com/thanks")
            .with_currency("eur");
        assert_eq!(config.success_url, "https://example.com/thanks");
        assert_eq!(config.currency, "eur");
    }

    #[test]
    fn session_response_parses_without_url() {
        let json = r#"{"id": "cs_test_123"}"#;
        let session: StripeCheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "cs_test_123");
        assert!(session.url.is_none());
    }

    #[test]
    fn price_response_parses_id() {
        let json = r#"{"id": "price_abc", "object": "price", "unit_amount": 150000}"#;
        let price: StripePrice = serde_json::from_str(json).unwrap();
        assert_eq!(price.id, "price_abc");
    }
}
