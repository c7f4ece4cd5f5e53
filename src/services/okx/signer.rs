//! OKX REST request signing
//!
//! signature = base64(HMAC-SHA256(secret, timestamp + method + path + body))

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::RelayError;

type HmacSha256 = Hmac<Sha256>;

pub const ORDER_METHOD: &str = "POST";
pub const ORDER_PATH: &str = "/api/v5/trade/order";

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.sssZ`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn prehash(timestamp: &str, method: &str, path: &str, body: &str) -> String {
    format!("{timestamp}{method}{path}{body}")
}

pub struct RequestSigner {
    secret_key: String,
}

impl RequestSigner {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    pub fn sign(
        &self,
        timestamp: &str,
        method: &str,
        path: &str,
        body: &str,
    ) -> Result<String, RelayError> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| RelayError::Internal(format!("Invalid HMAC key: {e}")))?;
        mac.update(prehash(timestamp, method, path, body).as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

/// Order body plus the authentication material derived from it.
///
/// `timestamp` and `body` are reused verbatim for the outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedOrder {
    pub timestamp: String,
    pub body: String,
    pub signature: String,
}

impl SignedOrder {
    pub fn new(signer: &RequestSigner, timestamp: String, body: String) -> Result<Self, RelayError> {
        let signature = signer.sign(&timestamp, ORDER_METHOD, ORDER_PATH, &body)?;
        Ok(Self {
            timestamp,
            body,
            signature,
        })
    }
}
