//! API Gateway service - main entry point.
//!
//! Binds the public HTTP server and, when enabled, the admin server. Both stop
//! gracefully when the shutdown future passed to [`ApiGatewayService::serve`]
//! resolves.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::GatewayMetrics;
use crate::routes::{build_admin_router, build_http_router, AppState};
use axum::Router;
use rr_01_receipt_scoring::ReceiptRewardsApi;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(
        config: GatewayConfig,
        rewards: Arc<dyn ReceiptRewardsApi>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        let state = AppState::new(rewards, Arc::new(GatewayMetrics::new()), &config);

        Ok(Self { config, state })
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.state.metrics)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Public router, for embedding or in-process testing
    pub fn http_router(&self) -> Router {
        build_http_router(self.state.clone(), &self.config)
    }

    pub fn admin_router(&self) -> Router {
        build_admin_router(self.state.clone())
    }

    /// Run until `shutdown` resolves.
    ///
    /// Bind failures are returned before any server starts accepting.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Starting API Gateway...");

        let http_listener = bind(self.config.http_addr()).await?;
        let admin_listener = if self.config.admin.enabled {
            Some(bind(self.config.admin_addr()).await?)
        } else {
            None
        };

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            shutdown.await;
            info!("Received shutdown signal");
            let _ = shutdown_tx.send(true);
        });

        let admin_handle = admin_listener.map(|listener| {
            info!(addr = %self.config.admin_addr(), "Starting Admin server");
            let router = self.admin_router();
            let stop = wait_for_shutdown(shutdown_rx.clone());
            tokio::spawn(async move {
                axum::serve(listener, router)
                    .with_graceful_shutdown(stop)
                    .await
            })
        });

        info!(addr = %self.config.http_addr(), "Starting HTTP server");
        let http_result = axum::serve(http_listener, self.http_router())
            .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
            .await
            .map_err(GatewayError::Serve);

        if let Some(handle) = admin_handle {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!(error = %e, "Admin server error"),
                Err(e) => return Err(GatewayError::Task(e.to_string())),
            }
        }

        http_result?;
        info!("API Gateway stopped");
        Ok(())
    }
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, GatewayError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })
}

async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    // Err means the sender is gone; treat it as a stop request
    let _ = rx.wait_for(|stopped| *stopped).await;
}
