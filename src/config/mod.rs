//! Environment-driven configuration
//!
//! Credentials are snapshotted once at start-up and validated per request, so
//! a missing secret fails orders instead of failing the boot.

use std::env;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OKX_BASE_URL: &str = "https://www.okx.com";

const API_KEY_VAR: &str = "OKX_API_KEY";
const SECRET_KEY_VAR: &str = "OKX_SECRET_KEY";
const PASSPHRASE_VAR: &str = "OKX_PASSPHRASE";

/// Deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Base URL of the OKX REST API. Overridable for staging and tests.
pub fn get_okx_base_url() -> String {
    env::var("OKX_BASE_URL").unwrap_or_else(|_| DEFAULT_OKX_BASE_URL.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required configuration value: {name}")]
    MissingCredential { name: &'static str },
}

/// Validated OKX API credentials
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
    pub passphrase: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

/// Read-only snapshot of the exchange secrets as found in the environment
#[derive(Clone, Default)]
pub struct ExchangeSettings {
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub passphrase: Option<String>,
}

impl ExchangeSettings {
    pub fn new(
        api_key: Option<String>,
        secret_key: Option<String>,
        passphrase: Option<String>,
    ) -> Self {
        Self {
            api_key,
            secret_key,
            passphrase,
        }
    }

    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).ok(),
            secret_key: env::var(SECRET_KEY_VAR).ok(),
            passphrase: env::var(PASSPHRASE_VAR).ok(),
        }
    }

    /// Resolve the three secrets, treating empty strings as missing.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            api_key: required(&self.api_key, API_KEY_VAR)?,
            secret_key: required(&self.secret_key, SECRET_KEY_VAR)?,
            passphrase: required(&self.passphrase, PASSPHRASE_VAR)?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.credentials().is_ok()
    }
}

impl fmt::Debug for ExchangeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeSettings")
            .field("api_key", &self.api_key.is_some())
            .field("secret_key", &self.secret_key.is_some())
            .field("passphrase", &self.passphrase.is_some())
            .finish()
    }
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::MissingCredential { name }),
    }
}
