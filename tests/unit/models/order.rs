//! Unit tests for order body construction

use okx_signal_relay::models::{OrderRequest, PositionSide, ValidSignal};
use serde_json::Value;

fn valid_signal(side: &str, stop_loss: Option<&str>, target: Option<&str>) -> ValidSignal {
    ValidSignal {
        ticker: "BTC-USDT".to_string(),
        side: side.to_string(),
        stop_loss: stop_loss.map(str::to_string),
        target: target.map(str::to_string),
    }
}

#[test]
fn test_base_fields_are_fixed() {
    let order = OrderRequest::from_signal(&valid_signal("buy", None, None));
    assert_eq!(order.inst_id, "BTC-USDT-SWAP");
    assert_eq!(order.td_mode, "cross");
    assert_eq!(order.side, "buy");
    assert_eq!(order.pos_side, PositionSide::Long);
    assert_eq!(order.ord_type, "market");
    assert_eq!(order.sz, "1");
}

#[test]
fn test_unknown_side_is_passed_through_as_short() {
    let order = OrderRequest::from_signal(&valid_signal("hold", None, None));
    assert_eq!(order.side, "hold");
    assert_eq!(order.pos_side, PositionSide::Short);
}

#[test]
fn test_no_levels_omits_attach_algo_ords() {
    let order = OrderRequest::from_signal(&valid_signal("sell", None, None));
    assert!(!order.has_attached_orders());

    let json = order.to_canonical_json().unwrap();
    assert_eq!(
        json,
        r#"{"instId":"BTC-USDT-SWAP","tdMode":"cross","side":"sell","posSide":"short","ordType":"market","sz":"1"}"#
    );
    assert!(!json.contains("attachAlgoOrds"));
}

#[test]
fn test_stop_loss_only_leaves_take_profit_empty() {
    let order = OrderRequest::from_signal(&valid_signal("buy", Some("100"), None));
    let algos = order.attach_algo_ords.as_ref().expect("algo order attached");
    assert_eq!(algos.len(), 1);

    let algo = &algos[0];
    assert_eq!(algo.sl_trigger_px, "100");
    assert_eq!(algo.sl_ord_px, "-1");
    assert_eq!(algo.tp_trigger_px, "");
    assert_eq!(algo.tp_ord_px, "");
    assert_eq!(algo.sl_trigger_px_type, "last");
    assert_eq!(algo.tp_trigger_px_type, "last");
}

#[test]
fn test_both_levels_share_one_algo_order() {
    let order = OrderRequest::from_signal(&valid_signal("buy", Some("95"), Some("120")));
    let json: Value = serde_json::from_str(&order.to_canonical_json().unwrap()).unwrap();

    let algos = json["attachAlgoOrds"].as_array().unwrap();
    assert_eq!(algos.len(), 1);
    assert_eq!(algos[0]["slTriggerPx"], "95");
    assert_eq!(algos[0]["slOrdPx"], "-1");
    assert_eq!(algos[0]["tpTriggerPx"], "120");
    assert_eq!(algos[0]["tpOrdPx"], "-1");
}
