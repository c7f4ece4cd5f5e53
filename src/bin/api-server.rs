//! OKX Signal Relay API Server
//!
//! Accepts trading signals over HTTP and forwards them to OKX as signed
//! market orders. Stateless; each request is handled independently.

use dotenvy::dotenv;
use okx_signal_relay::config::{get_environment, get_port};
use okx_signal_relay::core::http::start_server;
use okx_signal_relay::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = get_port();
    let env = get_environment();
    info!("Starting OKX Signal Relay");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
