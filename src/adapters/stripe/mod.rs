//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port against the Stripe HTTP API:
//! recurring price creation and hosted checkout sessions. The API key is
//! handled via `secrecy::SecretString`.

mod mock_payment_provider;
mod stripe_adapter;

pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
