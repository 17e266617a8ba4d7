//! HTTP surface for the user context.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::{directory_routes, user_routes};
