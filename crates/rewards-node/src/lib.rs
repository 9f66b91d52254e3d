//! # Rewards Node
//!
//! Startup wiring for the receipt rewards service.
//!
//! ```text
//! env ──→ GatewayConfig ──┐
//!                         ↓
//! InMemoryScoreStore → RewardsService → ApiGatewayService ──→ :8000
//! ```

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use rr_01_receipt_scoring::{InMemoryScoreStore, RewardsService};
use rr_02_api_gateway::{ApiGatewayService, GatewayConfig, GatewayError};
use tracing::{info, warn};

/// Load configuration from the process environment.
pub fn load_config() -> GatewayConfig {
    load_config_from(|key| env::var(key).ok())
}

/// Apply `RR_*` overrides to the default gateway configuration.
///
/// Unparseable values are logged and ignored.
pub fn load_config_from<F>(lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GatewayConfig::default();

    override_from(&lookup, "RR_HTTP_HOST", &mut config.http.host);
    override_from(&lookup, "RR_HTTP_PORT", &mut config.http.port);
    override_from(&lookup, "RR_ADMIN_ENABLED", &mut config.admin.enabled);
    override_from(&lookup, "RR_ADMIN_PORT", &mut config.admin.port);
    override_from(&lookup, "RR_MAX_BODY_BYTES", &mut config.limits.max_body_bytes);

    config
}

fn override_from<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparseable environment override"),
    }
}

/// Build the gateway over a fresh in-memory store.
pub fn build_gateway(config: GatewayConfig) -> Result<ApiGatewayService, GatewayError> {
    let store = Arc::new(InMemoryScoreStore::new());
    let rewards = Arc::new(RewardsService::new(store));

    info!(
        http = %config.http_addr(),
        admin_enabled = config.admin.enabled,
        "Wiring receipt rewards service"
    );

    ApiGatewayService::new(config, rewards)
}
