//! Route handlers.
//!
//! Bodies that fail to decode are rejected here and never reach the gateway.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use super::dto::{HealthResponse, RootResponse, SwitchModeQuery, SwitchModeResponse};
use super::error::ApiError;
use super::AppState;
use crate::application::catalog::ModelCatalog;
use crate::domain::{ConversationRequest, ConversationResult, GenerationRequest, GenerationResult};

pub const SERVICE_TITLE: &str = "Financial AI Chatbot - LLM Service";

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_TITLE.to_string(),
        health: "/api/v1/health".to_string(),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service.clone(),
        mode: state.gateway.mode(),
    })
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    let Json(request) = payload?;
    state
        .gateway
        .generate_text(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::gateway("Error generating text", &e))
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<Json<ConversationResult>, ApiError> {
    let Json(request) = payload?;
    state
        .gateway
        .chat(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::gateway("Error in chat", &e))
}

pub async fn models(State(state): State<Arc<AppState>>) -> Json<ModelCatalog> {
    Json(state.gateway.catalog())
}

pub async fn switch_mode(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SwitchModeQuery>, QueryRejection>,
) -> Result<Json<SwitchModeResponse>, ApiError> {
    let Query(query) = query?;
    let mode = state
        .gateway
        .set_mode(&query.mode)
        .map_err(|e| ApiError::gateway("", &e))?;
    info!(mode = %mode, "Mode switched over HTTP");

    Ok(Json(SwitchModeResponse {
        message: format!("Switched to {mode} mode"),
        current_mode: mode,
    }))
}
