//! Unit tests for OKX request signing

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use okx_signal_relay::services::okx::{
    prehash, RequestSigner, SignedOrder, ORDER_METHOD, ORDER_PATH,
};

const TIMESTAMP: &str = "2024-01-15T10:30:00.000Z";
const BODY: &str = r#"{"instId":"BTC-USDT-SWAP","tdMode":"cross","side":"buy","posSide":"long","ordType":"market","sz":"1"}"#;
// base64(HMAC-SHA256("test-secret", TIMESTAMP + "POST" + "/api/v5/trade/order" + BODY))
const EXPECTED_SIGNATURE: &str = "8RS750jyxKPpg5gP8vImq4CU7f3eAGSvCX+GsR1uUWU=";

#[test]
fn test_known_signature_vector() {
    let signer = RequestSigner::new("test-secret");
    let signature = signer
        .sign(TIMESTAMP, ORDER_METHOD, ORDER_PATH, BODY)
        .unwrap();
    assert_eq!(signature, EXPECTED_SIGNATURE);
}

#[test]
fn test_signature_is_deterministic() {
    let signer = RequestSigner::new("test-secret");
    let first = signer.sign(TIMESTAMP, "POST", ORDER_PATH, BODY).unwrap();
    let second = signer.sign(TIMESTAMP, "POST", ORDER_PATH, BODY).unwrap();
    assert_eq!(first, second);
    assert_eq!(BASE64.decode(&first).unwrap().len(), 32);
}

#[test]
fn test_signature_depends_on_every_input() {
    let signer = RequestSigner::new("test-secret");
    let base = signer.sign(TIMESTAMP, "POST", ORDER_PATH, BODY).unwrap();

    let other_time = signer
        .sign("2024-01-15T10:30:00.001Z", "POST", ORDER_PATH, BODY)
        .unwrap();
    let other_body = signer
        .sign(TIMESTAMP, "POST", ORDER_PATH, &BODY.replace("buy", "sell"))
        .unwrap();
    let other_secret = RequestSigner::new("another-secret")
        .sign(TIMESTAMP, "POST", ORDER_PATH, BODY)
        .unwrap();

    assert_ne!(base, other_time);
    assert_ne!(base, other_body);
    assert_ne!(base, other_secret);
}

#[test]
fn test_signed_order_reuses_timestamp_and_body() {
    let signer = RequestSigner::new("test-secret");
    let signed = SignedOrder::new(&signer, TIMESTAMP.to_string(), BODY.to_string()).unwrap();

    assert_eq!(signed.timestamp, TIMESTAMP);
    assert_eq!(signed.body, BODY);
    assert_eq!(signed.signature, EXPECTED_SIGNATURE);
}

#[test]
fn test_prehash_layout() {
    let text = prehash(TIMESTAMP, ORDER_METHOD, ORDER_PATH, BODY);
    assert!(text.starts_with("2024-01-15T10:30:00.000ZPOST/api/v5/trade/order{"));
    assert!(text.ends_with(BODY));
}
