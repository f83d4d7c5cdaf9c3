use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use giftlist_ai::CompletionError;
use giftlist_core::error::CoreError;
use serde_json::json;

/// Canonical messages for the statuses whose wire shape is pinned: callers
/// always see these exact strings, never the underlying detail.
const MSG_UNAUTHORIZED: &str = "Unauthorized";
const MSG_FORBIDDEN: &str = "Forbidden";
const MSG_INTERNAL: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{"error": ...}` JSON
/// responses. 401, 403, and 500 carry canonical messages only; their detail
/// is logged server-side and never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `giftlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A completion-provider error from `giftlist_ai`.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(detail) => {
                    tracing::debug!(detail = %detail, "Unauthorized request");
                    (StatusCode::UNAUTHORIZED, MSG_UNAUTHORIZED.to_string())
                }
                CoreError::Forbidden(detail) => {
                    tracing::debug!(detail = %detail, "Forbidden request");
                    (StatusCode::FORBIDDEN, MSG_FORBIDDEN.to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Completion-provider errors ---
            AppError::Completion(err) => {
                tracing::error!(error = %err, "Completion provider error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409.
/// - Everything else maps to 500 with the canonical sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
    }
}
