//! Handlers for the `/test-cases` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use profiler_core::error::CoreError;
use profiler_core::prompts::validate_user_message;
use profiler_core::types::DbId;
use profiler_db::models::test_case::{CreateTestCase, TestCase, UpdateTestCase};
use profiler_db::repositories::TestCaseRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::prompts::ensure_prompt_owned;
use crate::middleware::auth::AuthUser;
use crate::query::PromptIdParam;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TestCase",
        id,
    })
}

/// POST /api/v1/test-cases?prompt_id=
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PromptIdParam>,
    Json(input): Json<CreateTestCase>,
) -> AppResult<(StatusCode, Json<DataResponse<TestCase>>)> {
    validate_user_message(&input.user_message)?;
    ensure_prompt_owned(&state, params.prompt_id, auth.user_id).await?;

    let test_case = TestCaseRepo::create(&state.pool, params.prompt_id, &input).await?;

    tracing::info!(
        test_case_id = test_case.id,
        prompt_id = params.prompt_id,
        "Test case created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: test_case })))
}

/// GET /api/v1/test-cases/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TestCase>>> {
    let test_case = TestCaseRepo::find_for_owner(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: test_case }))
}

/// GET /api/v1/test-cases/prompt/{prompt_id}
///
/// Ascending id, which is also the order a run visits them in.
pub async fn list_by_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TestCase>>>> {
    ensure_prompt_owned(&state, prompt_id, auth.user_id).await?;
    let test_cases = TestCaseRepo::list_for_prompt(&state.pool, prompt_id).await?;
    Ok(Json(DataResponse { data: test_cases }))
}

/// PUT /api/v1/test-cases/{id}
///
/// Partial update: omitted fields keep their stored value.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestCase>,
) -> AppResult<Json<DataResponse<TestCase>>> {
    if let Some(msg) = &input.user_message {
        validate_user_message(msg)?;
    }

    let test_case = TestCaseRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(test_case_id = id, user_id = auth.user_id, "Test case updated");

    Ok(Json(DataResponse { data: test_case }))
}

/// DELETE /api/v1/test-cases/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TestCaseRepo::delete(&state.pool, id, auth.user_id).await? {
        tracing::info!(test_case_id = id, user_id = auth.user_id, "Test case deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
