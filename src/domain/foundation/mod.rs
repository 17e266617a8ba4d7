//! Foundation layer: shared value objects and error types.
//!
//! Everything in this module is pure and free of I/O. The rest of the
//! domain builds on these primitives.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PostId, SubscriptionId, UserId};
pub use timestamp::Timestamp;
