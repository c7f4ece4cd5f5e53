//! OKX order payload built from a validated signal
//!
//! Field declaration order is the wire order. The serialized body is signed
//! as-is, so reordering fields here changes every signature.

use serde::Serialize;

use super::signal::{PositionSide, ValidSignal};

pub const INSTRUMENT_SUFFIX: &str = "-SWAP";
pub const TRADE_MODE_CROSS: &str = "cross";
pub const ORDER_TYPE_MARKET: &str = "market";
pub const ORDER_SIZE: &str = "1";
pub const TRIGGER_PX_TYPE_LAST: &str = "last";
/// Order price meaning "fill at market once triggered"
pub const MARKET_ORDER_PX: &str = "-1";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub inst_id: String,
    pub td_mode: String,
    pub side: String,
    pub pos_side: PositionSide,
    pub ord_type: String,
    pub sz: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_algo_ords: Option<Vec<AttachAlgoOrder>>,
}

/// Stop-loss / take-profit pair attached to the parent order.
///
/// Both legs are always present; an unset leg carries empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachAlgoOrder {
    pub tp_trigger_px_type: String,
    pub sl_trigger_px_type: String,
    pub sl_trigger_px: String,
    pub sl_ord_px: String,
    pub tp_trigger_px: String,
    pub tp_ord_px: String,
}

impl AttachAlgoOrder {
    /// Returns `None` when neither a stop-loss nor a target is set.
    pub fn from_levels(stop_loss: Option<&str>, target: Option<&str>) -> Option<Self> {
        if stop_loss.is_none() && target.is_none() {
            return None;
        }

        let (sl_trigger_px, sl_ord_px) = leg(stop_loss);
        let (tp_trigger_px, tp_ord_px) = leg(target);

        Some(Self {
            tp_trigger_px_type: TRIGGER_PX_TYPE_LAST.to_string(),
            sl_trigger_px_type: TRIGGER_PX_TYPE_LAST.to_string(),
            sl_trigger_px,
            sl_ord_px,
            tp_trigger_px,
            tp_ord_px,
        })
    }
}

fn leg(trigger: Option<&str>) -> (String, String) {
    match trigger {
        Some(px) => (px.to_string(), MARKET_ORDER_PX.to_string()),
        None => (String::new(), String::new()),
    }
}

impl OrderRequest {
    pub fn from_signal(signal: &ValidSignal) -> Self {
        let algo = AttachAlgoOrder::from_levels(
            signal.stop_loss.as_deref(),
            signal.target.as_deref(),
        );

        Self {
            inst_id: format!("{}{}", signal.ticker, INSTRUMENT_SUFFIX),
            td_mode: TRADE_MODE_CROSS.to_string(),
            side: signal.side.clone(),
            pos_side: signal.direction().position_side(),
            ord_type: ORDER_TYPE_MARKET.to_string(),
            sz: ORDER_SIZE.to_string(),
            attach_algo_ords: algo.map(|a| vec![a]),
        }
    }

    pub fn has_attached_orders(&self) -> bool {
        self.attach_algo_ords.is_some()
    }

    /// Exact body string that is both signed and sent
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
