//! HTTP surface for the subscription context.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::subscription_routes;
