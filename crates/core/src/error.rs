//! Domain errors raised before or around persistence.
//!
//! The HTTP layer maps each variant to a status code; see
//! `profiler_api::error::AppError`.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No such row, or the row belongs to another user.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected by a `validate_*` rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request collides with existing data held by someone else.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, malformed or rejected identity token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
