//! HTTP surface for the post context.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::post_router;
