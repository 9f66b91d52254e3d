//! Tracing middleware.
//!
//! Wraps each request in an `api_request` span, records the outcome on it
//! and feeds the status and latency into [`GatewayMetrics`].

use axum::{body::Body, http::Request, response::Response};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug, info_span, Instrument, Span};

use super::metrics::{GatewayMetrics, RequestTimer};

/// Tracing layer that creates spans for each request
#[derive(Clone)]
pub struct TracingLayer {
    metrics: Arc<GatewayMetrics>,
}

impl TracingLayer {
    pub fn new(metrics: Arc<GatewayMetrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService {
            inner,
            metrics: Arc::clone(&self.metrics),
        }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
    metrics: Arc<GatewayMetrics>,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();
        let timer = RequestTimer::new(Arc::clone(&self.metrics));

        let span = info_span!(
            "api_request",
            http.method = %req.method(),
            http.target = %req.uri().path(),
            http.status_code = tracing::field::Empty,
            otel.status_code = tracing::field::Empty,
        );

        Box::pin(
            async move {
                let result = inner.call(req).await;

                match &result {
                    Ok(response) => {
                        let status = response.status();
                        let span = Span::current();
                        span.record("http.status_code", status.as_u16());
                        span.record(
                            "otel.status_code",
                            if status.is_success() { "OK" } else { "ERROR" },
                        );
                        debug!(status = status.as_u16(), "[rr-02] Request completed");
                        timer.finish(status);
                    }
                    Err(_) => {
                        Span::current().record("otel.status_code", "ERROR");
                        timer.finish(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}
