//! Subscription aggregate entity.
//!
//! A Subscription tracks one user's plan purchase. The lifecycle is a
//! small state machine:
//!
//! ```text
//! NONE ──select_plan──▶ PENDING (is_paid=false) ──mark_paid──▶ PAID_ACTIVE
//! ```
//!
//! There is no transition back: once paid, a record never returns to
//! pending, and no expiry transition exists. `end_date` is declared for
//! forward compatibility but never populated by current logic.
//!
//! # Invariants
//!
//! - At most one `is_paid = false` record per user. This is preserved
//!   procedurally by the select-plan flow (get-or-update) and backed by a
//!   partial unique index in the schema.
//! - `mark_paid` is the only way to set `is_paid`; it also records the
//!   provider session id and checkout link.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};

use super::{Plan, SubscriptionError};

/// Position of a subscription in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Plan selected, payment not yet initiated.
    Pending,

    /// Checkout session created; the record is active and counted as paid.
    PaidActive,

    /// Deactivated record (kept for history; no current transition
    /// produces this, rows may carry it from manual intervention).
    Inactive,
}

/// Subscription aggregate - one user's plan purchase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for this subscription.
    pub id: SubscriptionId,

    /// User who owns this subscription.
    pub user_id: UserId,

    /// Selected plan.
    pub plan: Plan,

    /// When the plan was first selected.
    pub start_date: Timestamp,

    /// Declared but never populated by current logic (see DESIGN.md).
    pub end_date: Option<Timestamp>,

    /// Whether the record is active.
    pub is_active: bool,

    /// Whether payment has been initiated for this record.
    pub is_paid: bool,

    /// Provider checkout session id, set when payment is initiated.
    pub checkout_session_id: Option<String>,

    /// Provider-hosted payment link, set when payment is initiated.
    pub payment_link: Option<String>,
}

impl Subscription {
    /// Creates a new unpaid subscription for a freshly selected plan.
    pub fn select(id: SubscriptionId, user_id: UserId, plan: Plan) -> Self {
        Self {
            id,
            user_id,
            plan,
            start_date: Timestamp::now(),
            end_date: None,
            is_active: true,
            is_paid: false,
            checkout_session_id: None,
            payment_link: None,
        }
    }

    /// Overwrites the plan on an unpaid record.
    ///
    /// Repeated plan selection before payment converges to the latest
    /// choice instead of creating duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has already been paid.
    pub fn change_plan(&mut self, plan: Plan) -> Result<(), SubscriptionError> {
        if self.is_paid {
            return Err(SubscriptionError::already_paid(self.id));
        }
        self.plan = plan;
        Ok(())
    }

    /// Marks the record paid and stores the provider handles.
    ///
    /// Payment is recorded at checkout-session creation time, before the
    /// buyer completes checkout. That ordering is intentional and kept
    /// (see DESIGN.md before changing it).
    ///
    /// # Errors
    ///
    /// Returns an error if the record has already been paid.
    pub fn mark_paid(
        &mut self,
        session_id: impl Into<String>,
        payment_link: impl Into<String>,
    ) -> Result<(), SubscriptionError> {
        if self.is_paid {
            return Err(SubscriptionError::already_paid(self.id));
        }
        self.checkout_session_id = Some(session_id.into());
        self.payment_link = Some(payment_link.into());
        self.is_paid = true;
        self.is_active = true;
        Ok(())
    }

    /// Whether this record grants access to paid content.
    pub fn grants_access(&self) -> bool {
        self.is_active && self.is_paid
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SubscriptionStatus {
        if !self.is_active {
            SubscriptionStatus::Inactive
        } else if self.is_paid {
            SubscriptionStatus::PaidActive
        } else {
            SubscriptionStatus::Pending
        }
    }

    /// Price of the selected plan in whole currency units.
    pub fn price(&self) -> u32 {
        self.plan.price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> Subscription {
        Subscription::select(SubscriptionId::new(), UserId::new(), Plan::OneMonth)
    }

    #[test]
    fn select_starts_pending_and_unpaid() {
        let sub = pending();
        assert!(!sub.is_paid);
        assert!(sub.is_active);
        assert_eq!(sub.status(), SubscriptionStatus::Pending);
        assert!(!sub.grants_access());
        assert!(sub.checkout_session_id.is_none());
        assert!(sub.payment_link.is_none());
        assert!(sub.end_date.is_none());
    }

    #[test]
    fn change_plan_overwrites_in_place() {
        let mut sub = pending();
        sub.change_plan(Plan::OneYear).unwrap();
        assert_eq!(sub.plan, Plan::OneYear);
        assert_eq!(sub.price(), 10000);
        assert!(!sub.is_paid);
    }

    #[test]
    fn change_plan_is_idempotent_for_repeated_selection() {
        let mut sub = pending();
        sub.change_plan(Plan::SixMonth).unwrap();
        sub.change_plan(Plan::SixMonth).unwrap();
        assert_eq!(sub.plan, Plan::SixMonth);
        assert_eq!(sub.status(), SubscriptionStatus::Pending);
    }

    #[test]
    fn mark_paid_sets_flags_and_provider_handles() {
        let mut sub = pending();
        sub.mark_paid("cs_123", "https://checkout.example.com/cs_123")
            .unwrap();

        assert!(sub.is_paid);
        assert!(sub.is_active);
        assert_eq!(sub.status(), SubscriptionStatus::PaidActive);
        assert!(sub.grants_access());
        assert_eq!(sub.checkout_session_id.as_deref(), Some("cs_123"));
        assert_eq!(
            sub.payment_link.as_deref(),
            Some("https://checkout.example.com/cs_123")
        );
    }

    #[test]
    fn mark_paid_twice_is_rejected() {
        let mut sub = pending();
        sub.mark_paid("cs_123", "https://pay.example.com").unwrap();
        let result = sub.mark_paid("cs_456", "https://pay.example.com/2");
        assert!(matches!(result, Err(SubscriptionError::AlreadyPaid(_))));
        assert_eq!(sub.checkout_session_id.as_deref(), Some("cs_123"));
    }

    #[test]
    fn change_plan_after_payment_is_rejected() {
        let mut sub = pending();
        sub.mark_paid("cs_123", "https://pay.example.com").unwrap();
        let result = sub.change_plan(Plan::OneYear);
        assert!(matches!(result, Err(SubscriptionError::AlreadyPaid(_))));
        assert_eq!(sub.plan, Plan::OneMonth);
    }

    #[test]
    fn inactive_record_grants_no_access() {
        let mut sub = pending();
        sub.mark_paid("cs_123", "https://pay.example.com").unwrap();
        sub.is_active = false;
        assert!(!sub.grants_access());
        assert_eq!(sub.status(), SubscriptionStatus::Inactive);
    }

    #[test]
    fn end_date_is_never_populated_by_transitions() {
        let mut sub = pending();
        sub.change_plan(Plan::OneYear).unwrap();
        sub.mark_paid("cs_123", "https://pay.example.com").unwrap();
        assert!(sub.end_date.is_none());
    }
}
