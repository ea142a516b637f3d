#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use profiler_api::auth::token::{generate_token, AuthConfig, Claims, TokenKey};
use profiler_api::config::ServerConfig;
use profiler_api::router::build_app_router;
use profiler_api::state::{AppState, ChatService};
use profiler_llm::{ChatClient, ChatRequest, ChatRole, LlmError};
use sqlx::PgPool;
use tower::ServiceExt;

/// HS256 secret shared by [`test_config`] and [`token_for`].
pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// Default identity used by most tests.
pub const ALICE_UID: &str = "uid-alice";
pub const ALICE_EMAIL: &str = "alice@example.com";

/// A second identity for ownership checks.
pub const BOB_UID: &str = "uid-bob";
pub const BOB_EMAIL: &str = "bob@example.com";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            key: TokenKey::Secret(TEST_SECRET.to_string()),
            issuer: None,
            audience: None,
        },
    }
}

/// Chat client that never leaves the process.
///
/// - `"Hi"` completes with `"Hello!"` (padded, to check trimming).
/// - `"Bye"` fails as if the hosted API answered 500.
/// - `"Empty"` fails with an empty completion.
/// - Anything else echoes `"<system> | <user>"`.
pub struct StubChatClient;

#[async_trait]
impl ChatClient for StubChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let text_of = |role: ChatRole| {
            request
                .messages
                .iter()
                .find(|m| m.role == role)
                .map(|m| m.content.clone())
                .unwrap_or_default()
        };
        let system = text_of(ChatRole::System);
        let user = text_of(ChatRole::User);

        match user.as_str() {
            "Hi" => Ok("  Hello!\n".to_string()),
            "Bye" => Err(LlmError::Api {
                status: 500,
                body: "upstream exploded".to_string(),
            }),
            "Empty" => Err(LlmError::EmptyResponse),
            _ => Ok(format!("{system} | {user}")),
        }
    }
}

/// Build the full application router with the production middleware stack,
/// a stub chat client and the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        chat: ChatService {
            client: Arc::new(StubChatClient),
            temperature: 0.7,
        },
    };
    build_app_router(state, &config)
}

/// Issue a valid token for the given identity.
pub fn token_for(uid: &str, email: &str) -> String {
    generate_token(uid, email, TEST_SECRET, 900).expect("token generation should succeed")
}

/// Valid token for `uid` that carries no `email` claim.
pub fn token_without_email(uid: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: uid.to_string(),
        email: None,
        exp: now + 900,
        iat: Some(now),
        iss: None,
        jti: None,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// Token for the default test identity.
pub fn alice_token() -> String {
    token_for(ALICE_UID, ALICE_EMAIL)
}

/// Token for the second test identity.
pub fn bob_token() -> String {
    token_for(BOB_UID, BOB_EMAIL)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

/// Authenticated POST without a body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create a prompt through the API and return its id.
pub async fn create_prompt(pool: &PgPool, name: &str, token: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/prompts",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a test case through the API and return its id.
pub async fn create_test_case(pool: &PgPool, prompt_id: i64, message: &str, token: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/test-cases?prompt_id={prompt_id}"),
        serde_json::json!({ "user_message": message }),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a version through the API and return the response `data` object.
pub async fn create_version(
    pool: &PgPool,
    prompt_id: i64,
    text: &str,
    token: &str,
) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/versions",
        serde_json::json!({ "prompt_id": prompt_id, "system_prompt": text }),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
