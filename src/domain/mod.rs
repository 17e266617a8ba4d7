//! Domain layer: aggregates, value objects, and business rules.
//!
//! Pure logic only; all I/O lives behind the traits in [`crate::ports`].

pub mod foundation;
pub mod post;
pub mod subscription;
pub mod user;
