//! Subscription domain: plans, pricing, and the purchase lifecycle.

mod errors;
mod plan;
mod record;

pub use errors::SubscriptionError;
pub use plan::{interval_months_for, price_for, Plan};
pub use record::{Subscription, SubscriptionStatus};
