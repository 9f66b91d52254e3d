//! Request metrics for the admin `/metrics` endpoint.

use axum::http::StatusCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// API Gateway metrics
#[derive(Default)]
pub struct GatewayMetrics {
    // Request counters
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub client_errors: AtomicU64,
    pub not_found: AtomicU64,
    pub internal_errors: AtomicU64,

    // Receipts accepted by POST /receipts/process, repeats included
    pub receipts_processed: AtomicU64,

    // Latency tracking (simplified - in production use histograms)
    pub total_latency_ms: AtomicU64,
    pub request_count_for_latency: AtomicU64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished request by its response status
    pub fn record_request(&self, status: StatusCode, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if status.is_success() {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else if status == StatusCode::NOT_FOUND {
            self.not_found.fetch_add(1, Ordering::Relaxed);
        } else if status.is_client_error() {
            self.client_errors.fetch_add(1, Ordering::Relaxed);
        } else if status.is_server_error() {
            self.internal_errors.fetch_add(1, Ordering::Relaxed);
        }

        self.total_latency_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.request_count_for_latency
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_receipt_processed(&self) {
        self.receipts_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.request_count_for_latency.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Export metrics as JSON. `receipts_scored` comes from the store.
    pub fn to_json(&self, receipts_scored: usize) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "success": self.requests_success.load(Ordering::Relaxed),
                "client_errors": self.client_errors.load(Ordering::Relaxed),
                "not_found": self.not_found.load(Ordering::Relaxed),
                "internal_errors": self.internal_errors.load(Ordering::Relaxed),
            },
            "receipts": {
                "processed": self.receipts_processed.load(Ordering::Relaxed),
                "scored": receipts_scored,
            },
            "latency": {
                "average_ms": self.average_latency_ms(),
            }
        })
    }
}

/// Request timing helper
pub struct RequestTimer {
    start: Instant,
    metrics: Arc<GatewayMetrics>,
}

impl RequestTimer {
    pub fn new(metrics: Arc<GatewayMetrics>) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn finish(self, status: StatusCode) {
        let latency_ms = self.start.elapsed().as_millis() as u64;
        self.metrics.record_request(status, latency_ms);
    }
}
