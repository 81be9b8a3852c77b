#![allow(dead_code)]

//! Test infrastructure for jot-server API tests

use jot_ai::{AiError, Classifier};
use jot_auth::SessionManager;
use jot_config::Config;
use jot_core::OrganizeResult;
use jot_server::AppState;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite.
///
/// Single connection so every handle sees the same in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/jot-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Classifier stand-in that returns a canned result and counts calls,
/// so tests can assert the quota gate short-circuits before it.
pub struct ScriptedClassifier {
    pub calls: AtomicUsize,
    result: OrganizeResult,
}

impl ScriptedClassifier {
    pub fn returning(result: OrganizeResult) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            result,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for ScriptedClassifier {
    async fn classify(&self, _text: &str) -> Result<OrganizeResult, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

/// Create AppState for testing with default config and a scripted
/// classifier.
pub async fn create_test_app_state(classifier: Arc<ScriptedClassifier>) -> AppState {
    let pool = create_test_pool().await;
    let config = Config::default();
    let sessions = SessionManager::new(pool.clone(), config.auth.session_ttl_days);

    AppState {
        pool,
        sessions,
        classifier,
        config: Arc::new(config),
    }
}

/// Canned classification: one task and one issue, no events or notes.
pub fn task_and_issue_result() -> OrganizeResult {
    serde_json::from_value(serde_json::json!({
        "tasks": [{"content": "Submit the report", "due_date": "2026-08-28", "is_important": true}],
        "events": [],
        "issues": [{"content": "Login button unresponsive", "status": "OPEN"}],
        "notes": []
    }))
    .expect("canned result should deserialize")
}

/// Send a JSON request through the router, optionally with a Cookie
/// header, and return the raw response.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request should build");

    app.oneshot(request).await.expect("router should respond")
}

/// Send a bodyless request through the router.
pub async fn send(app: Router, method: &str, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = builder
        .body(Body::empty())
        .expect("request should build");

    app.oneshot(request).await.expect("router should respond")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Pull `name=value` out of the response's Set-Cookie headers.
pub fn cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|h| {
            let (pair, _) = h.split_once(';').unwrap_or((h, ""));
            let (cookie_name, value) = pair.split_once('=')?;
            (cookie_name == name).then(|| value.to_string())
        })
}

/// Register a user and return a Cookie header value for their session.
pub async fn register_user(app: &Router, email: &str) -> String {
    let response = send_json(
        app.clone(),
        "POST",
        "/api/auth/register",
        None,
        serde_json::json!({
            "email": email,
            "password": "hunter2hunter2",
            "name": "Test User"
        }),
    )
    .await;

    let token = cookie_value(&response, "session_id").expect("register should set session cookie");
    format!("session_id={token}")
}
