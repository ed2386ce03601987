pub mod extract;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::content::handlers;
use crate::errors::{panic_response, AppError};
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/content-types", get(handlers::handle_content_types))
        .route("/api/writing-styles", get(handlers::handle_writing_styles))
        .route(
            "/api/generate-content",
            post(handlers::handle_generate_content),
        )
        .route(
            "/api/analyze-content",
            post(handlers::handle_analyze_content),
        )
        .route(
            "/api/generate-variations",
            post(handlers::handle_generate_variations),
        )
        .route(
            "/api/get-seo-suggestions",
            post(handlers::handle_get_seo_suggestions),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
