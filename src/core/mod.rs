//! HTTP surface of the relay

pub mod http;
pub mod orders;

pub use http::*;
pub use orders::*;
