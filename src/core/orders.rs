//! Order submission endpoint
//!
//! validate signal -> resolve credentials -> build body -> sign -> one POST to
//! OKX -> mirror the exchange status back to the caller.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use super::http::AppState;
use crate::error::RelayError;
use crate::metrics::{OUTCOME_ACCEPTED, OUTCOME_FAILED, OUTCOME_REJECTED};
use crate::models::{OrderRequest, Signal, ValidSignal};
use crate::services::okx::{timestamp_now, ExchangeReply, RequestSigner, SignedOrder};

#[derive(Debug, Serialize)]
pub struct OrderRelayResponse {
    pub success: bool,
    pub data: Value,
    pub debug: OrderDebug,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDebug {
    pub timestamp: String,
    pub order_body: OrderRequest,
    pub has_attached_orders: bool,
}

/// `/api/create-order` handler. Mounted for every method; non-POST requests
/// get a 405 from here rather than from the router.
pub async fn create_order(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    match submit_order(&state, &method, &body).await {
        Ok(response) => response,
        Err(err) => {
            if err.is_unexpected() {
                error!(error = %err, "Order submission failed");
            } else {
                warn!(status = %err.status(), error = %err, "Order request rejected");
            }
            err.into_response()
        }
    }
}

async fn submit_order(
    state: &AppState,
    method: &Method,
    body: &[u8],
) -> Result<Response, RelayError> {
    if *method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let signal = extract_signal(body)?;
    let credentials = state.settings.credentials()?;

    let timestamp = timestamp_now();
    let order = OrderRequest::from_signal(&signal);
    let body = order.to_canonical_json()?;
    let signed = SignedOrder::new(&RequestSigner::new(&credentials.secret_key), timestamp, body)?;

    info!(
        inst_id = %order.inst_id,
        side = %order.side,
        pos_side = order.pos_side.as_str(),
        has_attached_orders = order.has_attached_orders(),
        "Submitting order to OKX"
    );

    let reply = match state.gateway.submit(&credentials, &signed).await {
        Ok(reply) => reply,
        Err(err) => {
            state.metrics.record_order(OUTCOME_FAILED);
            return Err(err);
        }
    };

    info!(
        inst_id = %order.inst_id,
        status = reply.status,
        "OKX responded"
    );
    state.metrics.record_order(if reply.is_success() {
        OUTCOME_ACCEPTED
    } else {
        OUTCOME_REJECTED
    });

    relay_response(reply, signed.timestamp, order)
}

/// Pull `signal` out of the request body and check its required fields.
///
/// An empty body or a missing/non-object `signal` is a client error; a body
/// that is not JSON at all surfaces as an internal error.
pub fn extract_signal(body: &[u8]) -> Result<ValidSignal, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RelayError::MissingSignalFields);
    }

    let payload: Value = serde_json::from_slice(body)?;
    let signal: Signal = match payload.get("signal") {
        Some(raw) if raw.is_object() => serde_json::from_value(raw.clone())?,
        _ => return Err(RelayError::MissingSignalFields),
    };

    signal.validate()
}

fn relay_response(
    reply: ExchangeReply,
    timestamp: String,
    order: OrderRequest,
) -> Result<Response, RelayError> {
    let status = StatusCode::from_u16(reply.status)
        .map_err(|e| RelayError::Internal(format!("Invalid exchange status: {e}")))?;

    let body = OrderRelayResponse {
        success: reply.is_success(),
        data: reply.body,
        debug: OrderDebug {
            timestamp,
            has_attached_orders: order.has_attached_orders(),
            order_body: order,
        },
    };

    Ok((status, Json(body)).into_response())
}
