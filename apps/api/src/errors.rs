use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// No model client was configured at startup.
    #[error("Generation backend unavailable")]
    BackendUnavailable,

    /// The model call failed. `operation` names what the caller was doing.
    #[error("Failed to {operation}: {message}")]
    Generation {
        operation: &'static str,
        message: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn generation(operation: &'static str, source: LlmError) -> Self {
        AppError::Generation {
            operation,
            message: source.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation("Request must be JSON".to_string())
            }
            other => AppError::Validation(format!("Invalid JSON body: {}", other.body_text())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error, message) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
                "Resource not found".to_string(),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                "Invalid request".to_string(),
            ),
            AppError::BackendUnavailable => {
                tracing::error!("Request rejected: generation backend is not initialized");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BACKEND_UNAVAILABLE",
                    "Generation backend not initialized. Check API key.".to_string(),
                    "Service unavailable".to_string(),
                )
            }
            AppError::Generation { operation, message } => {
                tracing::error!("LLM error while trying to {operation}: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    message.clone(),
                    format!("Failed to {operation}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "code": code,
            "error": error,
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Converts a handler panic caught by `CatchPanicLayer` into a JSON 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
