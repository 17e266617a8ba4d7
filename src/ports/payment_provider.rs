//! Payment provider port for external payment processing.
//!
//! Defines the contract for payment gateway integrations (e.g., Stripe).
//! The flow is two synchronous round trips: create a provider-side price
//! object, then open a hosted checkout session against it. Both calls are
//! network-bound and may fail; failures are fatal to the surrounding
//! request, with no retry or compensation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a recurring price object in the payment system.
    ///
    /// Returns the provider's handle for use in checkout sessions.
    async fn create_price(&self, request: CreatePriceRequest)
        -> Result<PriceHandle, PaymentError>;

    /// Create a hosted checkout session for the given price.
    ///
    /// Returns the session id and a URL for the buyer to complete payment.
    async fn create_checkout_session(
        &self,
        price: &PriceHandle,
    ) -> Result<CheckoutSession, PaymentError>;
}

/// Request to create a recurring price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePriceRequest {
    /// Amount in minor currency units (e.g. cents).
    pub amount_minor_units: u64,

    /// Billing interval in months.
    pub interval_months: u32,
}

/// Provider-held price object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHandle {
    /// Provider's price id.
    pub id: String,
}

/// Hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session id.
    pub id: String,

    /// URL for the buyer to complete checkout.
    pub url: String,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Attach the provider's own error code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create a provider-side error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        DomainError::new(ErrorCode::PaymentFailed, err.to_string())
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Provider rejected the request.
    InvalidRequest,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
