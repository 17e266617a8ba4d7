//! Mock payment provider for testing.
//!
//! Configurable in-memory implementation of `PaymentProvider` for unit
//! and integration tests. Supports pre-configured responses, error
//! injection and call tracking.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{
    CheckoutSession, CreatePriceRequest, PaymentError, PaymentProvider, PriceHandle,
};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
/// mock.set_error(PaymentError::network("Test outage"));
/// let result = mock.create_price(request).await;
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Next price handle to return.
    next_price: Option<PriceHandle>,

    /// Next checkout session to return.
    next_checkout: Option<CheckoutSession>,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Recorded price requests for assertions.
    price_requests: Vec<CreatePriceRequest>,

    /// Recorded session requests (price ids) for assertions.
    session_requests: Vec<String>,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price handle to return on the next `create_price` call.
    pub fn set_price(&self, price: PriceHandle) {
        self.inner.lock().unwrap().next_price = Some(price);
    }

    /// Set the session to return on the next `create_checkout_session` call.
    pub fn set_checkout(&self, session: CheckoutSession) {
        self.inner.lock().unwrap().next_checkout = Some(session);
    }

    /// Make the next call fail with the given error.
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Price requests received so far.
    pub fn price_requests(&self) -> Vec<CreatePriceRequest> {
        self.inner.lock().unwrap().price_requests.clone()
    }

    /// Price ids that sessions were requested for.
    pub fn session_requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().session_requests.clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_price(
        &self,
        request: CreatePriceRequest,
    ) -> Result<PriceHandle, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        if let Some(err) = state.next_error.take() {
            return Err(err);
        }
        state.price_requests.push(request);
        Ok(state.next_price.take().unwrap_or(PriceHandle {
            id: "price_mock".to_string(),
        }))
    }

    async fn create_checkout_session(
        &self,
        price: &PriceHandle,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        if let Some(err) = state.next_error.take() {
            return Err(err);
        }
        state.session_requests.push(price.id.clone());
        Ok(state.next_checkout.take().unwrap_or_else(|| CheckoutSession {
            id: "cs_mock".to_string(),
            url: format!("https://checkout.example.com/{}", price.id),
        }))
    }
}
