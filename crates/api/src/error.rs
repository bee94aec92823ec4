use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use respawn_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for timer file failures and template render errors.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// Page handlers turn validation and auth failures into flash notices
/// themselves, so only storage and rendering failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A timer file error.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template render failed");
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

/// Classify a store error into an HTTP status, error code, and message.
///
/// - `UnknownBoss` maps to 404.
/// - Everything else is a storage failure: 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::UnknownBoss(name) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Boss '{name}' not found"),
        ),
        other => {
            tracing::error!(error = %other, "Timer store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "The timer store could not be accessed".to_string(),
            )
        }
    }
}
