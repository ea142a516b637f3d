//! Handlers for the `/prompts` resource.
//!
//! Every prompt is owned by one user. A prompt owned by someone else is
//! reported exactly like a missing one.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use profiler_core::error::CoreError;
use profiler_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use profiler_core::prompts::validate_prompt_name;
use profiler_core::types::DbId;
use profiler_db::models::prompt::{CreatePrompt, Prompt};
use profiler_db::repositories::PromptRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /prompts/{id}/rename`.
#[derive(Debug, Deserialize)]
pub struct RenamePromptRequest {
    pub new_name: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a prompt owned by `user_id`, or fail with 404.
///
/// Shared by every handler that reaches a resource through its prompt.
pub(crate) async fn ensure_prompt_owned(
    state: &AppState,
    prompt_id: DbId,
    user_id: DbId,
) -> AppResult<Prompt> {
    PromptRepo::find_for_owner(&state.pool, prompt_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id: prompt_id,
        }))
}

// ---------------------------------------------------------------------------
// POST /prompts
// ---------------------------------------------------------------------------

pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<(StatusCode, Json<DataResponse<Prompt>>)> {
    validate_prompt_name(&input.name)?;

    let prompt = PromptRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        prompt_id = prompt.id,
        user_id = auth.user_id,
        "Prompt created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: prompt })))
}

// ---------------------------------------------------------------------------
// GET /prompts
// ---------------------------------------------------------------------------

/// Newest first. Without `?limit=` every prompt is returned; an explicit
/// limit is clamped like any other page.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Prompt>>>> {
    let limit = params
        .limit
        .map(|l| clamp_limit(Some(l), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT));
    let offset = clamp_offset(params.offset);
    let prompts = PromptRepo::list_for_owner(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: prompts }))
}

// ---------------------------------------------------------------------------
// GET /prompts/{id}
// ---------------------------------------------------------------------------

pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Prompt>>> {
    let prompt = ensure_prompt_owned(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// PATCH /prompts/{id}/rename
// ---------------------------------------------------------------------------

pub async fn rename(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RenamePromptRequest>,
) -> AppResult<Json<DataResponse<Prompt>>> {
    validate_prompt_name(&input.new_name)?;

    let prompt = PromptRepo::rename(&state.pool, id, auth.user_id, &input.new_name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    tracing::info!(prompt_id = id, user_id = auth.user_id, "Prompt renamed");

    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// DELETE /prompts/{id}
// ---------------------------------------------------------------------------

/// Removes the prompt with its test cases and versions. Run logs are kept.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PromptRepo::delete(&state.pool, id, auth.user_id).await?;
    if deleted {
        tracing::info!(prompt_id = id, user_id = auth.user_id, "Prompt deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))
    }
}
