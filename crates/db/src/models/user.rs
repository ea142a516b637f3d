//! User entity model and DTOs.

use profiler_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// `external_uid` is the identifier assigned by the token issuer; it is
/// `NULL` only for users created outside the token flow.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub external_uid: Option<String>,
    pub created_at: Timestamp,
}
