//! HTTP routes and handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use rr_01_receipt_scoring::{Receipt, ReceiptId, ReceiptRewardsApi};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::debug;

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{HealthResponse, PointsResponse, ProcessResponse, UsageResponse};
use crate::middleware::{create_cors_layer, GatewayMetrics, TracingLayer};

/// Shared state for handlers
#[derive(Clone)]
pub struct AppState {
    pub rewards: Arc<dyn ReceiptRewardsApi>,
    pub metrics: Arc<GatewayMetrics>,
    pub usage: Arc<UsageResponse>,
}

impl AppState {
    pub fn new(
        rewards: Arc<dyn ReceiptRewardsApi>,
        metrics: Arc<GatewayMetrics>,
        config: &GatewayConfig,
    ) -> Self {
        Self {
            rewards,
            metrics,
            usage: Arc::new(UsageResponse::for_base(&config.http_addr().to_string())),
        }
    }
}

/// Build the public HTTP router with its middleware stack
pub fn build_http_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(&config.cors))
        .layer(TracingLayer::new(Arc::clone(&state.metrics)))
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes));

    Router::new()
        .route("/", get(usage))
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(receipt_points))
        .layer(middleware)
        .with_state(state)
}

/// Build the admin router (health and metrics only)
pub fn build_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .with_state(state)
}

async fn usage(State(state): State<AppState>) -> Json<UsageResponse> {
    Json(state.usage.as_ref().clone())
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `POST /receipts/process`
///
/// Any body that fails to buffer, parse or validate is a `400` with the same
/// message; the cause only goes to the log.
async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let body = body.map_err(|e| {
        debug!(reason = %e, "[rr-02] Request body rejected");
        ApiError::BadRequest
    })?;

    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        debug!(reason = %e, "[rr-02] Receipt JSON rejected");
        ApiError::from(e)
    })?;

    let id = state.rewards.process(receipt)?;
    state.metrics.record_receipt_processed();

    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    // A string that is not a well-formed ID cannot name a stored receipt
    let points = ReceiptId::parse(&id)
        .and_then(|id| state.rewards.points(&id))
        .ok_or(ApiError::NotFound)?;

    Ok(Json(PointsResponse { points }))
}

async fn metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.metrics.to_json(state.rewards.scored_count()))
}
