//! OKX signal relay
//!
//! Turns an inbound trading signal into a signed OKX market order and relays
//! the exchange's answer back to the caller.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

pub use error::RelayError;
