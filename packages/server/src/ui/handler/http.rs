//! HTTP API endpoint handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{Json, extract::State};

use tamariba_shared::protocol::MessageDto;

use super::super::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get all known room names with their histories.
///
/// Read-only; used by frontends to seed their room sidebar before the
/// WebSocket session starts.
pub async fn get_rooms(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Vec<MessageDto>>> {
    Json(state.list_rooms_usecase.execute().await)
}
