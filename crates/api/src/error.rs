use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use posterly_pipeline::ScanError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// A catalog scan failure is surfaced as a 500 on the one affected request;
/// it never terminates the serving process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource.
    #[error("{entity} '{name}' not found")]
    NotFound { entity: &'static str, name: String },

    /// The output directory could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound { entity, name } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} '{name}' not found"),
            ),
            AppError::Scan(err) => {
                tracing::error!(error = %err, "Catalog scan failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SCAN_ERROR",
                    "Cannot list posters".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
