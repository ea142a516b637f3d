pub mod health;
pub mod prompts;
pub mod run;
pub mod run_logs;
pub mod test_cases;
pub mod users;
pub mod versions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/me                                        current user
/// /users                                           list users
///
/// /prompts                                         list, create
/// /prompts/{id}                                    get, delete
/// /prompts/{id}/rename                             rename (PATCH)
///
/// /test-cases?prompt_id=                           create (POST)
/// /test-cases/{id}                                 get, update, delete
/// /test-cases/prompt/{prompt_id}                   list for prompt
///
/// /versions                                        create (POST)
/// /versions/{id}                                   get
/// /versions/prompt/{prompt_id}                     list for prompt
/// /versions/current/{prompt_id}                    current version
///
/// /run/prompt/{prompt_id}                          run (POST)
///
/// /run-logs?prompt_id=&limit=&offset=              list own run logs
/// ```
///
/// Every route requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/prompts", prompts::router())
        .nest("/test-cases", test_cases::router())
        .nest("/versions", versions::router())
        .nest("/run", run::router())
        .nest("/run-logs", run_logs::router())
}
