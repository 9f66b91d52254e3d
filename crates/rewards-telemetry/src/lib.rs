//! # Rewards Telemetry
//!
//! Structured logging for the receipt rewards service.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rewards_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RR_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `RR_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |
//! | `RR_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `RR_SERVICE_NAME` | `receipt-rewards` | Service name |

mod config;
mod logging;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global tracing subscriber described by `config`.
///
/// Fails if a subscriber is already installed, so call it once at startup.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Telemetry initialized"
    );

    Ok(())
}
