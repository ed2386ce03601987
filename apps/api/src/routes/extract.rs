use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with the rejection replaced by `AppError`, so a missing
/// `content-type`, malformed JSON, or a wrong-typed field all answer 400 in the
/// same error shape as every other validation failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
