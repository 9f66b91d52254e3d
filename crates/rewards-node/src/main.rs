//! # Receipt Rewards Node
//!
//! Serves `POST /receipts/process` and `GET /receipts/{id}/points` until
//! Ctrl+C.

use anyhow::{Context, Result};
use rewards_node::{build_gateway, load_config};
use rewards_telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("failed to initialise telemetry")?;

    let config = load_config();
    let gateway = build_gateway(config).context("invalid gateway configuration")?;

    info!("Node is running. Press Ctrl+C to stop.");
    gateway
        .serve(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // Keep serving; the process can still be killed
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("gateway stopped with an error")?;

    Ok(())
}
