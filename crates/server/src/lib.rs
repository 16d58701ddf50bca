//! HTTP surface for the warrior roster.
//!
//! Exposes [`WarriorService`] as a REST-style resource collection keyed by
//! warrior id, plus derived-attribute sub-resources. The router is built from
//! an [`AppState`] holding the single service instance created at startup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;

use std::sync::Arc;

use anyhow::Result;
use axum::{Json, Router, routing::get};
use runtime::WarriorService;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{LogConfig, ServerConfig};
pub use error::{ApiError, ApiResult, NOT_FOUND_MESSAGE};
pub use handlers::warrior_routes;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WarriorService>,
}

impl AppState {
    pub fn new(service: WarriorService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Full application router with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(warrior_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server is running on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
