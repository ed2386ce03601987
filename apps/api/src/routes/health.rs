use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports liveness plus whether a model backend is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Content Writing Assistant API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.gemini_model,
        "backend_ready": state.llm.is_some()
    }))
}
