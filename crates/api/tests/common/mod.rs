//! Shared helpers for the HTTP integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) against a test database pool, with the completion provider
//! replaced by an in-process mock so no network traffic leaves the tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use giftlist_ai::{CompletionError, CompletionProvider};
use giftlist_api::auth::jwt::{generate_access_token, JwtConfig};
use giftlist_api::auth::password::hash_password;
use giftlist_api::config::ServerConfig;
use giftlist_api::router::build_app_router;
use giftlist_api::state::AppState;
use giftlist_core::types::DbId;
use giftlist_db::models::user::{CreateUser, User};
use giftlist_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret shared by the token
/// helpers below.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-key".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// In-process stand-in for the completion provider.
///
/// Records every call (system instruction + user message) and either
/// returns a canned reply or fails, so tests can assert both the provider
/// inputs and that forbidden/unauthenticated requests never reach it.
pub struct MockCompletion {
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String)>>,
    reply: String,
    fail: bool,
}

impl MockCompletion {
    /// A provider that answers every call with `reply`.
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            reply: reply.to_string(),
            fail: false,
        })
    }

    /// A provider whose every call fails (simulates outage / timeout).
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            reply: String::new(),
            fail: true,
        })
    }

    /// Number of completed `complete` calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All `(system_instruction, user_message)` pairs seen so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), user_message.to_string()));

        if self.fail {
            return Err(CompletionError::Request("connection timed out".into()));
        }
        Ok(self.reply.clone())
    }
}

/// Build the application router with a default mock provider.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_provider(pool, MockCompletion::replying("Zkuste knížku."))
}

/// Build the application router with the given completion provider.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_provider(
    pool: PgPool,
    provider: Arc<dyn CompletionProvider>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        completion: provider,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database. Returns the row plus the
/// plaintext password used.
pub async fn seed_user(pool: &PgPool, email: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("user creation should succeed");
    (user, password.to_string())
}

/// Mint a valid access token for the given user id, signed with the test
/// config's secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

/// Create a user and return `(user, bearer token)`.
pub async fn seed_user_with_token(pool: &PgPool, email: &str) -> (User, String) {
    let (user, _password) = seed_user(pool, email).await;
    let token = token_for(user.id);
    (user, token)
}

/// POST helper asserting a 201 and returning the created entity's JSON.
pub async fn create_entity(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = post_json_auth(app, uri, token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}
