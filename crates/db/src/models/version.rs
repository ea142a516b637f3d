//! Version entity model and DTOs.

use profiler_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A version row from the `versions` table. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Version {
    pub id: DbId,
    pub number: i32,
    pub system_prompt: String,
    pub prompt_id: DbId,
    pub created_at: Timestamp,
}

/// Input for creating a new version. The number is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVersion {
    pub prompt_id: DbId,
    pub system_prompt: String,
}
