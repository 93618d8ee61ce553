//! Handler errors and their JSON form.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use springfield_core::CoreError;

/// Why a dashboard request failed.
///
/// Rendered as `{"error": ..., "code": ...}` with a matching status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The query names a combination the dashboard does not offer.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            Self::Core(core) => {
                // Datasets are validated at startup, so this is a bug.
                tracing::error!(error = %core, "Page could not be rendered");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, axum::Json(json!({ "error": error, "code": code }))).into_response()
    }
}
