//! HTTP error type shared by every handler and extractor.
//!
//! Every error renders as `{ "error": <message>, "code": <CODE> }`. Messages
//! of 5xx responses are replaced with a generic text; the detail only goes to
//! the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use profiler_core::error::CoreError;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `profiler_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any sqlx failure not translated closer to its source.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request rejected with a message meant for the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource that is not addressed by its own id
    /// (e.g. "no versions for this prompt").
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) | AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.client_message())
            }
            AppError::Core(CoreError::Validation(_)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.client_message(),
            ),
            AppError::Core(CoreError::Conflict(_)) => {
                (StatusCode::CONFLICT, "CONFLICT", self.client_message())
            }
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.client_message())
            }
            AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.client_message())
            }
            AppError::Database(err) => classify_sqlx_error(err),
        }
    }

    /// The message without the variant prefix that `Display` adds.
    fn client_message(&self) -> String {
        match self {
            AppError::Core(CoreError::Validation(msg))
            | AppError::Core(CoreError::Conflict(msg))
            | AppError::Core(CoreError::Unauthorized(msg))
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Whether `err` is a unique violation (`23505`) on the named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    err.as_database_error().is_some_and(|db_err| {
        db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
    })
}

/// Map a sqlx error to an HTTP status, error code and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_*` constraints map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let Some(db_err) = err.as_database_error() {
        if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
            if db_err.code().as_deref() == Some("23505") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
