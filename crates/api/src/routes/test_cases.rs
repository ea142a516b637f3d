//! Route definitions for the `/test-cases` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::test_cases;
use crate::state::AppState;

/// Routes mounted at `/test-cases`.
///
/// ```text
/// POST   /?prompt_id=                       -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /prompt/{prompt_id}                -> list_by_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(test_cases::create))
        .route(
            "/{id}",
            get(test_cases::get_by_id)
                .put(test_cases::update)
                .delete(test_cases::delete),
        )
        .route("/prompt/{prompt_id}", get(test_cases::list_by_prompt))
}
