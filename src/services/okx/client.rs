//! HTTP transport for OKX order submission

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::signer::{SignedOrder, ORDER_PATH};
use crate::config::{get_okx_base_url, Credentials};
use crate::error::RelayError;

pub const HEADER_ACCESS_KEY: &str = "OK-ACCESS-KEY";
pub const HEADER_ACCESS_SIGN: &str = "OK-ACCESS-SIGN";
pub const HEADER_ACCESS_TIMESTAMP: &str = "OK-ACCESS-TIMESTAMP";
pub const HEADER_ACCESS_PASSPHRASE: &str = "OK-ACCESS-PASSPHRASE";

/// Raw exchange answer: HTTP status plus parsed JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeReply {
    pub status: u16,
    pub body: Value,
}

impl ExchangeReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The single outbound call made per order
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(
        &self,
        credentials: &Credentials,
        order: &SignedOrder,
    ) -> Result<ExchangeReply, RelayError>;
}

pub struct OkxClient {
    http_client: Client,
    base_url: String,
}

impl OkxClient {
    pub fn new() -> Self {
        Self::with_client(get_okx_base_url(), Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn order_url(&self) -> String {
        format!("{}{}", self.base_url, ORDER_PATH)
    }
}

impl Default for OkxClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderGateway for OkxClient {
    async fn submit(
        &self,
        credentials: &Credentials,
        order: &SignedOrder,
    ) -> Result<ExchangeReply, RelayError> {
        let url = self.order_url();
        debug!(url = %url, timestamp = %order.timestamp, "Sending order to OKX");

        let response = self
            .http_client
            .post(&url)
            .header(HEADER_ACCESS_KEY, &credentials.api_key)
            .header(HEADER_ACCESS_SIGN, &order.signature)
            .header(HEADER_ACCESS_TIMESTAMP, &order.timestamp)
            .header(HEADER_ACCESS_PASSPHRASE, &credentials.passphrase)
            .header(CONTENT_TYPE, "application/json")
            .body(order.body.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        Ok(ExchangeReply { status, body })
    }
}
