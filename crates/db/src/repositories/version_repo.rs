//! Repository for the `versions` table.

use profiler_core::types::DbId;
use profiler_core::versioning::next_version_number;
use sqlx::PgPool;

use crate::models::version::{CreateVersion, Version};

/// Column list for versions queries.
const COLUMNS: &str = "id, number, system_prompt, prompt_id, created_at";

/// Same columns qualified with the `v` alias, for joined queries.
const V_COLUMNS: &str = "v.id, v.number, v.system_prompt, v.prompt_id, v.created_at";

/// Provides create/read operations for versions. Versions are never updated.
pub struct VersionRepo;

impl VersionRepo {
    /// Insert a new version, numbering it one past the prompt's current
    /// maximum (or 1 for the first version). Returns the created row.
    ///
    /// The parent prompt row is locked for the duration of the transaction, so
    /// the `MAX(number)` read and the insert see no concurrent creation for
    /// the same prompt. Returns [`sqlx::Error::RowNotFound`] if the
    /// prompt does not exist.
    pub async fn create(pool: &PgPool, input: &CreateVersion) -> Result<Version, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM prompts WHERE id = $1 FOR UPDATE")
            .bind(input.prompt_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        let current_max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(number) FROM versions WHERE prompt_id = $1")
                .bind(input.prompt_id)
                .fetch_one(&mut *tx)
                .await?;
        let number = next_version_number(current_max);

        let query = format!(
            "INSERT INTO versions (number, system_prompt, prompt_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let version = sqlx::query_as::<_, Version>(&query)
            .bind(number)
            .bind(&input.system_prompt)
            .bind(input.prompt_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(version)
    }

    /// Find a version by ID if its prompt belongs to `user_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Version>, sqlx::Error> {
        let query = format!(
            "SELECT {V_COLUMNS} FROM versions v
             JOIN prompts p ON p.id = v.prompt_id
             WHERE v.id = $1 AND p.user_id = $2"
        );
        sqlx::query_as::<_, Version>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all versions of a prompt, newest (highest number) first.
    pub async fn list_for_prompt(
        pool: &PgPool,
        prompt_id: DbId,
    ) -> Result<Vec<Version>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM versions
             WHERE prompt_id = $1
             ORDER BY number DESC"
        );
        sqlx::query_as::<_, Version>(&query)
            .bind(prompt_id)
            .fetch_all(pool)
            .await
    }

    /// Get the current (highest-numbered) version of a prompt.
    pub async fn get_current(
        pool: &PgPool,
        prompt_id: DbId,
    ) -> Result<Option<Version>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM versions
             WHERE prompt_id = $1
             ORDER BY number DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Version>(&query)
            .bind(prompt_id)
            .fetch_optional(pool)
            .await
    }
}
