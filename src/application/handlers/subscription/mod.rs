//! Subscription handlers: plan selection, payment initiation, access check.

mod check_access;
mod initiate_payment;
mod select_plan;

pub use check_access::{CheckAccessHandler, CheckAccessQuery, CheckAccessResult};
pub use initiate_payment::{
    InitiatePaymentCommand, InitiatePaymentHandler, InitiatePaymentResult,
};
pub use select_plan::{SelectPlanCommand, SelectPlanHandler, SelectPlanResult};
