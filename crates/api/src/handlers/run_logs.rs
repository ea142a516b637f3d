//! Handlers for the `/run-logs` resource.

use axum::extract::{Query, State};
use axum::Json;
use profiler_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use profiler_db::models::run_log::RunLog;
use profiler_db::repositories::RunLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::RunLogListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/run-logs?prompt_id=&limit=&offset=
///
/// Only the caller's own logs, newest first.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RunLogListParams>,
) -> AppResult<Json<DataResponse<Vec<RunLog>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let logs =
        RunLogRepo::list_for_user(&state.pool, auth.user_id, params.prompt_id, limit, offset)
            .await?;
    Ok(Json(DataResponse { data: logs }))
}
