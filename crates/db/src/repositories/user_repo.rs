//! Repository for the `users` table.

use profiler_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, external_uid, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by the identifier assigned by the token issuer.
    pub async fn find_by_external_uid(
        pool: &PgPool,
        external_uid: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE external_uid = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(external_uid)
            .fetch_optional(pool)
            .await
    }

    /// Return the user for `external_uid`, creating it on first sight.
    ///
    /// Concurrent first requests for the same identity resolve to the same row
    /// through `ON CONFLICT`. An email already owned by a different identity
    /// fails with a unique violation on `uq_users_email`.
    pub async fn find_or_create_by_external_uid(
        pool: &PgPool,
        external_uid: &str,
        email: &str,
    ) -> Result<User, sqlx::Error> {
        if let Some(user) = Self::find_by_external_uid(pool, external_uid).await? {
            return Ok(user);
        }

        let query = format!(
            "INSERT INTO users (email, external_uid)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_users_external_uid
             DO UPDATE SET external_uid = EXCLUDED.external_uid
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(external_uid)
            .fetch_one(pool)
            .await?;

        tracing::info!(user_id = user.id, "Provisioned user from external identity");
        Ok(user)
    }

    /// List users ordered by ID with pagination.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
