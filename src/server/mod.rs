//! HTTP server: router construction and the serve loop.
//!
//! The router is an explicitly constructed object owned by the caller —
//! there is no process-global application state. Per-request state is
//! limited to the immutable [`AppState`] handle, so concurrent requests
//! share nothing mutable and need no synchronisation.

pub mod error;
pub mod routes;

use crate::config::{ConvertConfig, ServerConfig};
use crate::error::ConvertError;
use crate::pipeline::render;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared, immutable per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Conversion settings applied to every upload.
    pub convert: Arc<ConvertConfig>,
}

impl AppState {
    pub fn new(convert: ConvertConfig) -> Self {
        Self {
            convert: Arc::new(convert),
        }
    }
}

/// Build the complete Axum router.
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/convert", post(routes::convert_pdf))
        .route("/health", get(routes::health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve requests until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), ConvertError> {
    if !render::pdfium_available() {
        tracing::warn!(
            "No pdfium library found at startup; /convert will return 503 until one is installed"
        );
    }

    let app = build_router(AppState::new(config.convert.clone()), config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| ConvertError::Internal(format!("Failed to bind {}: {}", config.bind, e)))?;
    tracing::info!(
        "Listening on {} (dpi={}, upload limit {} bytes)",
        config.bind,
        config.convert.dpi,
        config.max_upload_bytes
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| ConvertError::Internal(format!("Server error: {}", e)))
}
