//! HTTP-level tests for `POST /run/prompt/{prompt_id}`.
//!
//! The stub chat client answers "Hi" with "Hello!", fails "Bye" with an
//! upstream 500, fails "Empty" with an empty completion and echoes anything
//! else as `"<system> | <user>"`.

mod common;

use axum::http::StatusCode;
use common::{
    alice_token, bob_token, body_json, create_prompt, create_test_case, create_version,
    get_auth, post_auth, post_json_auth,
};
use sqlx::PgPool;

async fn run(pool: &PgPool, prompt_id: i64, body: serde_json::Value) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/v1/run/prompt/{prompt_id}"),
        body,
        &alice_token(),
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hi_bye_example_keeps_partial_results(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    let hi = create_test_case(&pool, prompt_id, "Hi", &alice_token()).await;
    let bye = create_test_case(&pool, prompt_id, "Bye", &alice_token()).await;

    let response = run(
        &pool,
        prompt_id,
        serde_json::json!({ "system_prompt": "Be nice" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["test_case_id"], hi);
    assert_eq!(results[0]["user_message"], "Hi");
    assert_eq!(results[0]["output"], "Hello!");
    assert_eq!(results[0]["status"], "completed");

    assert_eq!(results[1]["test_case_id"], bye);
    assert_eq!(results[1]["user_message"], "Bye");
    assert_eq!(results[1]["status"], "failed");
    assert_eq!(
        results[1]["output"],
        "OpenAI Error: Chat API error (500): upstream exploded"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn internal_failures_use_internal_prefix(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Empty", &alice_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({ "system_prompt": "x" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let output = json["data"]["results"][0]["output"].as_str().unwrap();
    assert!(output.starts_with("Internal Error: "), "got: {output}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn results_follow_test_case_order(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Echo", &alice_token()).await;
    let mut ids = Vec::new();
    for msg in ["one", "two", "three", "four"] {
        ids.push(create_test_case(&pool, prompt_id, msg, &alice_token()).await);
    }

    let response = run(&pool, prompt_id, serde_json::json!({ "system_prompt": "S" })).await;
    let json = body_json(response).await;
    let results = json["data"]["results"].as_array().unwrap();

    let got: Vec<i64> = results
        .iter()
        .map(|r| r["test_case_id"].as_i64().unwrap())
        .collect();
    assert_eq!(got, ids);
    assert_eq!(results[2]["output"], "S | three");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn omitted_system_prompt_uses_current_version(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "ping", &alice_token()).await;
    create_version(&pool, prompt_id, "Be nice", &alice_token()).await;
    create_version(&pool, prompt_id, "Be nicer", &alice_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["results"][0]["output"], "Be nicer | ping");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn omitted_system_prompt_without_versions_returns_404(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Hi", &alice_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_system_prompt_returns_400(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Hi", &alice_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({ "system_prompt": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "System prompt is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_test_cases_returns_404(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Lonely", &alice_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({ "system_prompt": "x" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No test cases found for this prompt"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn running_other_users_prompt_returns_404(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Mine", &bob_token()).await;
    create_test_case(&pool, prompt_id, "Hi", &bob_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({ "system_prompt": "x" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn log_flag_persists_one_log_per_case(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Hi", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Bye", &alice_token()).await;

    let response = run(
        &pool,
        prompt_id,
        serde_json::json!({ "system_prompt": "Be nice", "log": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/run-logs?prompt_id={prompt_id}"),
        &alice_token(),
    )
    .await;
    let json = body_json(response).await;
    let logs = json["data"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l["system_prompt"] == "Be nice"));

    let hi = logs.iter().find(|l| l["user_message"] == "Hi").unwrap();
    assert_eq!(hi["response"], "Hello!");
    let bye = logs.iter().find(|l| l["user_message"] == "Bye").unwrap();
    assert!(bye["response"].as_str().unwrap().starts_with("OpenAI Error: "));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn run_without_log_flag_writes_nothing(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Hi", &alice_token()).await;

    let response = run(&pool, prompt_id, serde_json::json!({ "system_prompt": "x" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM run_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bare_post_runs_current_version(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "ping", &alice_token()).await;
    create_version(&pool, prompt_id, "Be nice", &alice_token()).await;

    let app = common::build_test_app(pool);
    let response = post_auth(app, &format!("/api/v1/run/prompt/{prompt_id}"), &alice_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["results"][0]["output"], "Be nice | ping");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_log_write_still_returns_results(pool: PgPool) {
    let prompt_id = create_prompt(&pool, "Greeter", &alice_token()).await;
    create_test_case(&pool, prompt_id, "Hi", &alice_token()).await;

    // Make every run log insert fail.
    sqlx::query(
        "CREATE FUNCTION reject_run_log() RETURNS trigger AS $$
         BEGIN RAISE EXCEPTION 'run logs unavailable'; END;
         $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER reject_run_log BEFORE INSERT ON run_logs
         FOR EACH ROW EXECUTE FUNCTION reject_run_log()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let response = run(
        &pool,
        prompt_id,
        serde_json::json!({ "system_prompt": "Be nice", "log": true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["results"][0]["output"], "Hello!");

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM run_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
