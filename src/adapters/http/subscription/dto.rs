//! HTTP DTOs for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::{Plan, Subscription, SubscriptionStatus};

pub use crate::adapters::http::ErrorResponse;

/// Request to select a subscription plan.
///
/// Unknown plan identifiers are rejected here, at the boundary; the
/// domain-level resolver stays forgiving for stored data.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectPlanRequest {
    pub plan: Plan,
}

/// Response after initiating payment: the hosted checkout link and the
/// price the buyer will see.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub subscription: SubscriptionView,
    pub price: u32,
    pub payment_link: String,
}

/// Subscription view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionView {
    pub id: String,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub start_date: String,
    pub is_active: bool,
    pub is_paid: bool,
}

impl From<&Subscription> for SubscriptionView {
    fn from(sub: &Subscription) -> Self {
        Self {
            id: sub.id.to_string(),
            plan: sub.plan,
            status: sub.status(),
            start_date: sub.start_date.as_datetime().to_rfc3339(),
            is_active: sub.is_active,
            is_paid: sub.is_paid,
        }
    }
}

/// Static confirmation payload for the post-checkout landing page.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub message: &'static str,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self {
            message: "Thank you for subscribing",
        }
    }
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self::new()
    }
}
