//! HTTP service exposing the analyzer
//!
//! `POST /analyze` measures and corrects a JSON `{"text": ...}` body,
//! `GET /` answers with a plain-text banner.

mod cors;
mod error;
mod routes;

pub use cors::cors_layer;
pub use error::HttpError;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use legible_api::TextAnalyzer;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AnalysisConfig, ServerConfig};

/// Resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Tokio worker threads (0 = number of CPUs)
    pub workers: usize,
    /// Maximum blocking-pool threads
    pub threads: usize,
    /// Whole-request timeout (408 on expiry)
    pub request_timeout: Duration,
    /// Correction timeout, fed through the fallback policy
    pub correction_timeout: Duration,
    /// Allowed origins; `None` disables CORS
    pub cors_origins: Option<Vec<String>>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        let server = ServerConfig::default();
        let analysis = AnalysisConfig::default();
        Self {
            host: server.host,
            port: server.port,
            workers: server.workers,
            threads: server.threads,
            request_timeout: Duration::from_secs(server.timeout_secs),
            correction_timeout: Duration::from_millis(analysis.correction_timeout_ms),
            cors_origins: server.cors_enabled.then_some(server.cors_origins),
        }
    }
}

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    analyzer: Arc<TextAnalyzer>,
    correction_timeout: Duration,
}

impl AppState {
    /// Create handler state
    pub fn new(analyzer: Arc<TextAnalyzer>, correction_timeout: Duration) -> Self {
        Self {
            analyzer,
            correction_timeout,
        }
    }
}

/// Build the application router with its middleware
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    let router = Router::new()
        .route("/", get(routes::home))
        .route("/analyze", post(routes::analyze))
        .with_state(state)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(TraceLayer::new_for_http());

    match &settings.cors_origins {
        Some(origins) => router.layer(cors_layer(origins)),
        None => router,
    }
}

/// Bind and serve until SIGINT/SIGTERM
pub async fn serve(analyzer: Arc<TextAnalyzer>, settings: ServerSettings) -> anyhow::Result<()> {
    let state = AppState::new(analyzer, settings.correction_timeout);
    let app = router(state, &settings);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP listener on {addr}"))?;
    let actual_addr = listener
        .local_addr()
        .context("failed to read socket address")?;
    info!(%actual_addr, "starting legible server");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
