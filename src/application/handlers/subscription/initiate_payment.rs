//! InitiatePaymentHandler - Command handler for checkout creation.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{CreatePriceRequest, PaymentProvider, SubscriptionRepository};

/// Command to initiate payment on a pending subscription.
#[derive(Debug, Clone)]
pub struct InitiatePaymentCommand {
    pub subscription_id: SubscriptionId,
    pub requesting_user: UserId,
}

/// Result of successful payment initiation.
#[derive(Debug, Clone)]
pub struct InitiatePaymentResult {
    pub subscription: Subscription,

    /// Price shown to the buyer, in whole currency units.
    pub price: u32,

    /// Provider-hosted URL for completing checkout.
    pub payment_link: String,
}

/// Handler for payment initiation.
///
/// Resolves the plan's price and billing interval, asks the payment
/// provider for a price object and a hosted checkout session, then
/// persists the session handles and marks the record paid.
///
/// The record is marked paid at session-creation time, before the buyer
/// completes checkout. This mirrors the existing product behavior and
/// must not be reordered without a webhook-confirmed activation step
/// (see DESIGN.md).
pub struct InitiatePaymentHandler {
    repository: Arc<dyn SubscriptionRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
}

impl InitiatePaymentHandler {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        payment_provider: Arc<dyn PaymentProvider>,
    ) -> Self {
        Self {
            repository,
            payment_provider,
        }
    }

    pub async fn handle(
        &self,
        cmd: InitiatePaymentCommand,
    ) -> Result<InitiatePaymentResult, SubscriptionError> {
        // Ownership check: a subscription that exists but belongs to
        // someone else is reported as not found, with zero side effects.
        let mut subscription = self
            .repository
            .find_by_id(&cmd.subscription_id)
            .await?
            .filter(|s| s.user_id == cmd.requesting_user)
            .ok_or_else(|| SubscriptionError::not_found(cmd.subscription_id))?;

        let price = subscription.plan.price();
        let interval_months = subscription.plan.interval_months();

        // Prices are stored in whole units; the provider wants minor units.
        let price_handle = self
            .payment_provider
            .create_price(CreatePriceRequest {
                amount_minor_units: u64::from(price) * 100,
                interval_months,
            })
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.to_string()))?;

        let session = self
            .payment_provider
            .create_checkout_session(&price_handle)
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.to_string()))?;

        subscription.mark_paid(session.id.clone(), session.url.clone())?;
        self.repository.update(&subscription).await?;

        tracing::info!(
            subscription_id = %subscription.id,
            session_id = %session.id,
            plan = %subscription.plan,
            "Checkout session created"
        );

        Ok(InitiatePaymentResult {
            subscription,
            price,
            payment_link: session.url,
        })
    }
}
