//! Prompt entity model and DTOs.

use profiler_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A prompt row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new prompt. The owner comes from the authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrompt {
    pub name: String,
}
