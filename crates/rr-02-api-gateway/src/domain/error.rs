//! Error types for the API Gateway.
//!
//! `ApiError` is what a client sees; every variant renders as a one-key JSON
//! object with a fixed message. `GatewayError` covers server lifecycle.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rr_01_receipt_scoring::{ProcessError, ReceiptError, ScoringError};
use thiserror::Error;

use super::config::ConfigError;

pub const BAD_REQUEST_MESSAGE: &str = "The receipt is invalid.";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID";
pub const INTERNAL_MESSAGE: &str = "The receipt could not be scored.";

/// Client-facing error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", BAD_REQUEST_MESSAGE)]
    BadRequest,

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("{}", INTERNAL_MESSAGE)]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key of the single-entry error body
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::NotFound => "NotFound",
            Self::Internal => "InternalError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::Map::with_capacity(1);
        body.insert(self.kind().to_string(), self.to_string().into());
        (self.status_code(), Json(serde_json::Value::Object(body))).into_response()
    }
}

impl From<ReceiptError> for ApiError {
    fn from(_: ReceiptError) -> Self {
        Self::BadRequest
    }
}

impl From<ScoringError> for ApiError {
    fn from(_: ScoringError) -> Self {
        Self::Internal
    }
}

impl From<ProcessError> for ApiError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::Invalid(e) => e.into(),
            ProcessError::Scoring(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        Self::BadRequest
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Server lifecycle errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("server task failed: {0}")]
    Task(String),
}
