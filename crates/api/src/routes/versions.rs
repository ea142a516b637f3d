//! Route definitions for the `/versions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::versions;
use crate::state::AppState;

/// Routes mounted at `/versions`.
///
/// ```text
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// GET    /prompt/{prompt_id}                -> list_by_prompt
/// GET    /current/{prompt_id}               -> current
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(versions::create))
        .route("/{id}", get(versions::get_by_id))
        .route("/prompt/{prompt_id}", get(versions::list_by_prompt))
        .route("/current/{prompt_id}", get(versions::current))
}
