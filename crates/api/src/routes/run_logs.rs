//! Route definitions for the `/run-logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::run_logs;
use crate::state::AppState;

/// Routes mounted at `/run-logs`.
///
/// ```text
/// GET    /?prompt_id=&limit=&offset=        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(run_logs::list))
}
