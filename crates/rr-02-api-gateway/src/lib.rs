// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! RR-02 API Gateway - HTTP interface for the receipt rewards service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     API GATEWAY (rr-02)                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐                    ┌─────────────┐          │
//! │  │    HTTP     │                    │    Admin    │          │
//! │  │  Port 8000  │                    │  Port 8001  │          │
//! │  └──────┬──────┘                    └──────┬──────┘          │
//! │         │                                  │                 │
//! │  ┌──────┴──────────────────────┐    /health, /metrics        │
//! │  │      Middleware Stack       │                             │
//! │  │  CORS → Tracing → BodyLimit │                             │
//! │  └──────┬──────────────────────┘                             │
//! │         │                                                    │
//! │  ┌──────┴──────────────────────┐                             │
//! │  │  Routes (GET /, POST /receipts/process,                   │
//! │  │          GET /receipts/{id}/points)                       │
//! │  └──────┬──────────────────────┘                             │
//! └─────────┼────────────────────────────────────────────────────┘
//!           │
//!     ReceiptRewardsApi (rr-01)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use rr_02_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let config = GatewayConfig::default();
//! let service = ApiGatewayService::new(config, rewards)?;
//! service.serve(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod routes;
pub mod service;

// Re-exports for public API
pub use domain::config::{AdminConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::*;
pub use middleware::GatewayMetrics;
pub use routes::{build_http_router, AppState};
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by health checks
pub const SERVICE_NAME: &str = "receipt-rewards";
