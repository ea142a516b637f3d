//! Repository for the `test_cases` table.
//!
//! Test cases carry no owner column; ownership is checked by joining through
//! the parent prompt.

use profiler_core::types::DbId;
use sqlx::PgPool;

use crate::models::test_case::{CreateTestCase, TestCase, UpdateTestCase};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_message, prompt_id";

/// Same columns qualified with the `tc` alias, for joined queries.
const TC_COLUMNS: &str = "tc.id, tc.user_message, tc.prompt_id";

/// Provides CRUD operations for test cases.
pub struct TestCaseRepo;

impl TestCaseRepo {
    /// Insert a new test case for a prompt, returning the created row.
    pub async fn create(
        pool: &PgPool,
        prompt_id: DbId,
        input: &CreateTestCase,
    ) -> Result<TestCase, sqlx::Error> {
        let query = format!(
            "INSERT INTO test_cases (user_message, prompt_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TestCase>(&query)
            .bind(&input.user_message)
            .bind(prompt_id)
            .fetch_one(pool)
            .await
    }

    /// Find a test case by ID if its prompt belongs to `user_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<TestCase>, sqlx::Error> {
        let query = format!(
            "SELECT {TC_COLUMNS} FROM test_cases tc
             JOIN prompts p ON p.id = tc.prompt_id
             WHERE tc.id = $1 AND p.user_id = $2"
        );
        sqlx::query_as::<_, TestCase>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all test cases of a prompt in creation order. This is the order
    /// in which a run visits them.
    pub async fn list_for_prompt(
        pool: &PgPool,
        prompt_id: DbId,
    ) -> Result<Vec<TestCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM test_cases WHERE prompt_id = $1 ORDER BY id");
        sqlx::query_as::<_, TestCase>(&query)
            .bind(prompt_id)
            .fetch_all(pool)
            .await
    }

    /// Update a test case. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no such test case is reachable by `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTestCase,
    ) -> Result<Option<TestCase>, sqlx::Error> {
        let query = format!(
            "UPDATE test_cases tc SET
                user_message = COALESCE($3, tc.user_message)
             FROM prompts p
             WHERE tc.id = $1 AND p.id = tc.prompt_id AND p.user_id = $2
             RETURNING {TC_COLUMNS}"
        );
        sqlx::query_as::<_, TestCase>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.user_message)
            .fetch_optional(pool)
            .await
    }

    /// Delete a test case. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM test_cases tc
             USING prompts p
             WHERE tc.id = $1 AND p.id = tc.prompt_id AND p.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
