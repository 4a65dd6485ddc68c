//! Deployment Risk Inference Proxy
//!
//! HTTP service in front of the risk engine: `POST /assess`, `GET /health`.
//! Bind to 127.0.0.1 by default (internal only).

mod config;
mod error;
mod handlers;
mod state;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use config::{ConfigError, ProxyConfig};
pub use error::ApiError;
pub use handlers::{assess, health, HealthResponse};
pub use state::AppState;

/// Create the HTTP router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/assess", post(assess))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
