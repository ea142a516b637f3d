//! HTTP-level tests for the `/run-logs` resource.

mod common;

use axum::http::StatusCode;
use common::{alice_token, bob_token, body_json, create_prompt, create_test_case, get_auth, post_json_auth};
use sqlx::PgPool;

async fn logged_run(pool: &PgPool, prompt_id: i64, token: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/run/prompt/{prompt_id}"),
        serde_json::json!({ "system_prompt": "Be nice", "log": true }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logs_are_scoped_to_caller(pool: PgPool) {
    let alice_prompt = create_prompt(&pool, "A", &alice_token()).await;
    create_test_case(&pool, alice_prompt, "Hi", &alice_token()).await;
    logged_run(&pool, alice_prompt, &alice_token()).await;

    let bob_prompt = create_prompt(&pool, "B", &bob_token()).await;
    create_test_case(&pool, bob_prompt, "Hi", &bob_token()).await;
    logged_run(&pool, bob_prompt, &bob_token()).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/run-logs", &alice_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let logs = json["data"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["prompt_id"], alice_prompt);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filter_by_prompt_and_paginate(pool: PgPool) {
    let first = create_prompt(&pool, "First", &alice_token()).await;
    create_test_case(&pool, first, "Hi", &alice_token()).await;
    let second = create_prompt(&pool, "Second", &alice_token()).await;
    create_test_case(&pool, second, "Hi", &alice_token()).await;

    logged_run(&pool, first, &alice_token()).await;
    logged_run(&pool, first, &alice_token()).await;
    logged_run(&pool, second, &alice_token()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(app, &format!("/api/v1/run-logs?prompt_id={first}"), &alice_token()).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/run-logs?limit=1", &alice_token()).await).await;
    let logs = json["data"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    // Newest first.
    assert_eq!(logs[0]["prompt_id"], second);
}
