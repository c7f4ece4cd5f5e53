//! Failure kinds of the order relay and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing required fields: signal.ticker and signal.side")]
    MissingSignalFields,

    #[error("Missing OKX credentials in environment variables")]
    MissingCredentials(#[source] ConfigError),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingSignalFields => StatusCode::BAD_REQUEST,
            RelayError::MissingCredentials(_)
            | RelayError::Http(_)
            | RelayError::Json(_)
            | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Locally detected failures carry a fixed message; anything unexpected
    /// is reported as an internal error with its description attached.
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            RelayError::Http(_) | RelayError::Json(_) | RelayError::Internal(_)
        )
    }
}

impl From<ConfigError> for RelayError {
    fn from(err: ConfigError) -> Self {
        RelayError::MissingCredentials(err)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if self.is_unexpected() {
            json!({
                "error": "Internal server error",
                "message": self.to_string(),
            })
        } else {
            json!({ "error": self.to_string() })
        };
        (status, Json(body)).into_response()
    }
}
