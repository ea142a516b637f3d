//! Shared query parameter types for API handlers.

use profiler_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the handler via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?prompt_id=` selector used when creating a test case.
#[derive(Debug, Deserialize)]
pub struct PromptIdParam {
    pub prompt_id: DbId,
}

/// Filters for listing run logs (`?prompt_id=&limit=&offset=`).
#[derive(Debug, Deserialize)]
pub struct RunLogListParams {
    pub prompt_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
