//! Subscription plans and the pricing/interval resolver.
//!
//! The resolver is deliberately forgiving at the raw-string level: an
//! unrecognized plan identifier resolves to a zero price and an absent
//! billing interval rather than an error. Callers that want to reject
//! unknown plans must do so explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed subscription durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    OneMonth,
    ThreeMonth,
    SixMonth,
    OneYear,
}

impl Plan {
    /// All plans, in ascending duration order.
    pub const ALL: [Plan; 4] = [
        Plan::OneMonth,
        Plan::ThreeMonth,
        Plan::SixMonth,
        Plan::OneYear,
    ];

    /// Parses a plan identifier, returning `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Plan> {
        match s {
            "one_month" => Some(Plan::OneMonth),
            "three_month" => Some(Plan::ThreeMonth),
            "six_month" => Some(Plan::SixMonth),
            "one_year" => Some(Plan::OneYear),
            _ => None,
        }
    }

    /// The stable identifier used in storage and over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::OneMonth => "one_month",
            Plan::ThreeMonth => "three_month",
            Plan::SixMonth => "six_month",
            Plan::OneYear => "one_year",
        }
    }

    /// Human-readable plan name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::OneMonth => "1 month",
            Plan::ThreeMonth => "3 months",
            Plan::SixMonth => "6 months",
            Plan::OneYear => "1 year",
        }
    }

    /// Fixed price in whole currency units.
    pub fn price(&self) -> u32 {
        match self {
            Plan::OneMonth => 1500,
            Plan::ThreeMonth => 4000,
            Plan::SixMonth => 6000,
            Plan::OneYear => 10000,
        }
    }

    /// Billing interval in months.
    pub fn interval_months(&self) -> u32 {
        match self {
            Plan::OneMonth => 1,
            Plan::ThreeMonth => 3,
            Plan::SixMonth => 6,
            Plan::OneYear => 12,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves a raw plan identifier to its price.
///
/// Returns 0 for any unrecognized identifier; never fails.
pub fn price_for(plan: &str) -> u32 {
    Plan::parse(plan).map(|p| p.price()).unwrap_or(0)
}

/// Resolves a raw plan identifier to its billing interval in months.
///
/// Returns `None` for any unrecognized identifier; callers must handle
/// the absence rather than assume a number.
pub fn interval_months_for(plan: &str) -> Option<u32> {
    Plan::parse(plan).map(|p| p.interval_months())
}
