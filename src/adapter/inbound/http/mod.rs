//! HTTP surface.
//!
//! Endpoints, all but the root under `/api/v1`:
//! - GET  /
//! - GET  /health
//! - POST /generate
//! - POST /chat
//! - GET  /models
//! - POST /switch-mode?mode=

pub mod dto;
pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::gateway::Gateway;

/// Path prefix of the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Shared state for all handlers.
pub struct AppState {
    /// Mode-switching gateway behind every LLM endpoint.
    pub gateway: Arc<Gateway>,
    /// Name reported by the health endpoint.
    pub service: String,
}

impl AppState {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>, service: impl Into<String>) -> Self {
        Self {
            gateway,
            service: service.into(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(handler::health))
        .route("/generate", post(handler::generate))
        .route("/chat", post(handler::chat))
        .route("/models", get(handler::models))
        .route("/switch-mode", post(handler::switch_mode));

    Router::new()
        .route("/", get(handler::root))
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
