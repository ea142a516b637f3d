//! Route definitions for the `/prompts` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// DELETE /{id}                              -> delete
/// PATCH  /{id}/rename                       -> rename
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompts::list).post(prompts::create))
        .route("/{id}", get(prompts::get_by_id).delete(prompts::delete))
        .route("/{id}/rename", patch(prompts::rename))
}
