//! Test utilities for API server integration tests

use axum_test::TestServer;
use okx_signal_relay::config::ExchangeSettings;
use okx_signal_relay::core::http::{create_router, AppState, HealthStatus};
use okx_signal_relay::metrics::Metrics;
use okx_signal_relay::services::okx::OkxClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const SECRET_KEY: &str = "test-secret";
pub const PASSPHRASE: &str = "test-passphrase";

pub fn full_settings() -> ExchangeSettings {
    ExchangeSettings::new(
        Some(API_KEY.to_string()),
        Some(SECRET_KEY.to_string()),
        Some(PASSPHRASE.to_string()),
    )
}

/// Router wired to a wiremock server standing in for OKX
pub struct TestApp {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub exchange: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_settings(full_settings()).await
    }

    pub async fn with_settings(settings: ExchangeSettings) -> Self {
        let exchange = MockServer::start().await;
        let gateway = OkxClient::with_client(exchange.uri(), reqwest::Client::new());
        Self::build(settings, gateway, exchange)
    }

    /// Gateway pointed at `base_url` instead of the mock server
    pub async fn with_exchange_url(base_url: &str) -> Self {
        let exchange = MockServer::start().await;
        let gateway = OkxClient::with_client(base_url, reqwest::Client::new());
        Self::build(full_settings(), gateway, exchange)
    }

    fn build(settings: ExchangeSettings, gateway: OkxClient, exchange: MockServer) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            settings: Arc::new(settings),
            gateway: Arc::new(gateway),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            exchange,
        }
    }

    pub async fn mock_order_response(&self, status: u16, body: Value, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/v5/trade/order"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(expected_calls)
            .mount(&self.exchange)
            .await;
    }
}

pub fn okx_ack() -> Value {
    serde_json::json!({
        "code": "0",
        "msg": "",
        "data": [{ "ordId": "312269865356374016", "sCode": "0", "sMsg": "Order placed" }]
    })
}
