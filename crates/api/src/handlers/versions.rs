//! Handlers for the `/versions` resource.
//!
//! Versions are immutable snapshots of a prompt's system text. There is no
//! update or delete; a new text means a new version.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use profiler_core::error::CoreError;
use profiler_core::prompts::validate_system_prompt;
use profiler_core::types::DbId;
use profiler_db::models::version::{CreateVersion, Version};
use profiler_db::repositories::VersionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::prompts::ensure_prompt_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /versions
// ---------------------------------------------------------------------------

pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateVersion>,
) -> AppResult<(StatusCode, Json<DataResponse<Version>>)> {
    validate_system_prompt(&input.system_prompt)?;
    ensure_prompt_owned(&state, input.prompt_id, auth.user_id).await?;

    let version = VersionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        version_id = version.id,
        prompt_id = input.prompt_id,
        number = version.number,
        "Version created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: version })))
}

// ---------------------------------------------------------------------------
// GET /versions/{id}
// ---------------------------------------------------------------------------

pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Version>>> {
    let version = VersionRepo::find_for_owner(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Version",
            id,
        }))?;
    Ok(Json(DataResponse { data: version }))
}

// ---------------------------------------------------------------------------
// GET /versions/prompt/{prompt_id}
// ---------------------------------------------------------------------------

/// Highest number first.
pub async fn list_by_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Version>>>> {
    ensure_prompt_owned(&state, prompt_id, auth.user_id).await?;
    let versions = VersionRepo::list_for_prompt(&state.pool, prompt_id).await?;
    Ok(Json(DataResponse { data: versions }))
}

// ---------------------------------------------------------------------------
// GET /versions/current/{prompt_id}
// ---------------------------------------------------------------------------

pub async fn current(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Version>>> {
    ensure_prompt_owned(&state, prompt_id, auth.user_id).await?;
    let version = VersionRepo::get_current(&state.pool, prompt_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No versions found for this prompt".into()))?;
    Ok(Json(DataResponse { data: version }))
}
