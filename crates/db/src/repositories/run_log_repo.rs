//! Repository for the `run_logs` table.

use profiler_core::types::DbId;
use sqlx::PgPool;

use crate::models::run_log::{CreateRunLog, RunLog};

/// Column list for run_logs queries.
const COLUMNS: &str =
    "id, user_id, prompt_id, system_prompt, user_message, response, created_at";

/// Provides insert and listing operations for run logs.
pub struct RunLogRepo;

impl RunLogRepo {
    /// Insert a batch of run logs in one transaction, returning the rows in
    /// input order.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateRunLog],
    ) -> Result<Vec<RunLog>, sqlx::Error> {
        let query = format!(
            "INSERT INTO run_logs (user_id, prompt_id, system_prompt, user_message, response)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(inputs.len());
        for input in inputs {
            let row = sqlx::query_as::<_, RunLog>(&query)
                .bind(input.user_id)
                .bind(input.prompt_id)
                .bind(&input.system_prompt)
                .bind(&input.user_message)
                .bind(&input.response)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    /// List a user's run logs, newest first, optionally restricted to a prompt.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        prompt_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RunLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM run_logs
             WHERE user_id = $1 AND ($2::BIGINT IS NULL OR prompt_id = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, RunLog>(&query)
            .bind(user_id)
            .bind(prompt_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
