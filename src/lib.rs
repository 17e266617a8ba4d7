//! Inkgate - Content Publishing with Paid Subscriptions
//!
//! This crate implements a publishing backend where authors post articles,
//! readers register with SMS-confirmed phone numbers, and paid content is
//! gated behind a purchased subscription.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
