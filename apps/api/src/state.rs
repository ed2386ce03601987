use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend, built once at startup. `None` when no API key was configured.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}

impl AppState {
    /// Returns the model backend or `BackendUnavailable` if none was configured.
    pub fn generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.llm.as_deref().ok_or(AppError::BackendUnavailable)
    }
}
