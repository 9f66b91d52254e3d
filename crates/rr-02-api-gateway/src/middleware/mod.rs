//! Middleware stack for the API Gateway.
//!
//! Layer order: Request → CORS → Tracing (span + metrics) → BodyLimit → Handler

pub mod cors;
pub mod metrics;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{GatewayMetrics, RequestTimer};
pub use self::tracing::TracingLayer;
