//! Run log entity model and DTOs.

use profiler_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A run log row from the `run_logs` table.
///
/// `prompt_id` becomes `NULL` when the prompt is deleted; the log itself
/// is kept.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RunLog {
    pub id: DbId,
    pub user_id: DbId,
    pub prompt_id: Option<DbId>,
    pub system_prompt: String,
    pub user_message: String,
    pub response: String,
    pub created_at: Timestamp,
}

/// DTO for recording one run of one test case.
#[derive(Debug, Clone)]
pub struct CreateRunLog {
    pub user_id: DbId,
    pub prompt_id: Option<DbId>,
    pub system_prompt: String,
    pub user_message: String,
    pub response: String,
}
