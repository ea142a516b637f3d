//! Repository for the `prompts` table.
//!
//! Every lookup is scoped to the owning user; a prompt owned by someone else
//! behaves exactly like a missing one.

use profiler_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, user_id, created_at";

/// Provides CRUD operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePrompt,
    ) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (name, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.name)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a prompt by ID if it belongs to `user_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's prompts, most recently created first.
    ///
    /// `limit: None` returns every prompt (`LIMIT NULL` is `LIMIT ALL`).
    pub async fn list_for_owner(
        pool: &PgPool,
        user_id: DbId,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Rename a prompt. Returns `None` if no such prompt belongs to `user_id`.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        new_name: &str,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET name = $3
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(user_id)
            .bind(new_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt. Test cases and versions go with it; run logs keep
    /// their rows with `prompt_id` cleared. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
