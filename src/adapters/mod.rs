//! Adapters - implementations of the ports against real infrastructure.

pub mod http;
pub mod postgres;
pub mod sms;
pub mod stripe;
