//! Route definitions for prompt runs.

use axum::routing::post;
use axum::Router;

use crate::handlers::run;
use crate::state::AppState;

/// Routes mounted at `/run`.
///
/// ```text
/// POST   /prompt/{prompt_id}                -> run_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/prompt/{prompt_id}", post(run::run_prompt))
}
