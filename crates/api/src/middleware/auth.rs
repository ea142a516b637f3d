//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use profiler_core::error::CoreError;
use profiler_core::types::DbId;
use profiler_db::repositories::UserRepo;

use crate::auth::token::verify_token;
use crate::error::{is_unique_violation, AppError};
use crate::state::AppState;

/// Authenticated user resolved from the identity token in the
/// `Authorization` header.
///
/// Known identities are matched on `claims.sub` alone. The first request
/// carrying a valid token for an unknown identity creates the local user
/// record, which needs an `email` claim.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = verify_token(token, &state.config.auth).map_err(|e| {
            tracing::debug!(error = %e, "Rejected identity token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if let Some(user) = UserRepo::find_by_external_uid(&state.pool, &claims.sub).await? {
            return Ok(AuthUser { user_id: user.id });
        }

        // Unknown identity: the email is only needed to create the user.
        let email = claims
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Token does not carry an email claim".into(),
                ))
            })?;

        let user = UserRepo::find_or_create_by_external_uid(&state.pool, &claims.sub, &email)
            .await
            .map_err(|e| {
                if is_unique_violation(&e, "uq_users_email") {
                    AppError::Core(CoreError::Conflict(
                        "Email already registered to another identity".into(),
                    ))
                } else {
                    AppError::Database(e)
                }
            })?;

        Ok(AuthUser { user_id: user.id })
    }
}
