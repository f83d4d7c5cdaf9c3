use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// The API layer maps each variant onto an HTTP status; see the api crate's
/// `AppError` for the exact mapping and which messages are surfaced to
/// callers versus logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
