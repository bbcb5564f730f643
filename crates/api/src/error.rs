use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use signbridge_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds transport-specific
/// variants. Implements [`IntoResponse`] to produce the single JSON error
/// shape the client expects: `{"message": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `signbridge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The external prediction service could not be reached or answered
    /// with garbage.
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Duplicate => (StatusCode::BAD_REQUEST, core.to_string()),
                CoreError::InvalidCredentials => (StatusCode::UNAUTHORIZED, core.to_string()),
                CoreError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, core.to_string()),
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::UnlockDenied { .. } => (StatusCode::BAD_REQUEST, core.to_string()),
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, core.to_string()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Prediction service request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Prediction service unavailable".to_string(),
                )
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations on the `users` table map to 400
///   (duplicate identity), as a backstop behind the explicit pre-checks
///   in registration.
/// - Everything else is a store failure: 503 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                return (
                    StatusCode::BAD_REQUEST,
                    CoreError::Duplicate.to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Store unavailable".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Store unavailable".to_string(),
            )
        }
    }
}
