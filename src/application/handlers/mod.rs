//! Command/query handlers, one module per bounded context.

pub mod post;
pub mod subscription;
pub mod user;
