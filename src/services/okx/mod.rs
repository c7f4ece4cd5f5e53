//! OKX v5 REST integration: request signing and order transport

pub mod client;
pub mod signer;

pub use client::{ExchangeReply, OkxClient, OrderGateway};
pub use signer::{prehash, timestamp_now, RequestSigner, SignedOrder, ORDER_METHOD, ORDER_PATH};
