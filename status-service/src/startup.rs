//! Application startup and lifecycle management.

use crate::config::StatusConfig;
use crate::handlers;
use crate::services::{DatabaseProbe, PostgresProbe};
use axum::{middleware, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<StatusConfig>,
    pub probe: Arc<dyn DatabaseProbe>,
}

/// Builds the HTTP router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/time", get(handlers::current_time))
        .route("/db-check", get(handlers::db_check))
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the configured PostgreSQL database.
    pub async fn build(config: StatusConfig) -> Result<Self, AppError> {
        let probe = Arc::new(PostgresProbe::new(config.database.clone()));
        Self::build_with_probe(config, probe).await
    }

    /// Build the application with a caller-supplied database probe.
    pub async fn build_with_probe(
        config: StatusConfig,
        probe: Arc<dyn DatabaseProbe>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Status service listener bound");

        let state = AppState {
            config: Arc::new(config),
            probe,
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(
            service = %self.state.config.service_name,
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router(self.state)).await
    }
}
