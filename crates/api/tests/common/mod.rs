#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use respawn_core::catalog::BossCatalog;
use respawn_core::credentials::CredentialTable;
use tempfile::TempDir;
use tower::ServiceExt;

use respawn_api::config::ServerConfig;
use respawn_api::router::build_app_router;
use respawn_api::state::AppState;

/// Build a test `ServerConfig` with the built-in catalog and credentials,
/// storing timers in `timers_file`.
pub fn test_config(timers_file: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        timers_file,
        session_ttl: chrono::Duration::minutes(60),
        cookie_secure: false,
        catalog: Arc::new(BossCatalog::default()),
        credentials: Arc::new(CredentialTable::default()),
    }
}

/// Path of the timer file inside a test directory.
pub fn timers_path(dir: &TempDir) -> PathBuf {
    dir.path().join("bosses.json")
}

/// Build the full application router, with the same middleware stack as
/// production, over a timer file in `dir`.
pub fn build_test_app(dir: &TempDir) -> Router {
    let state = AppState::new(test_config(timers_path(dir))).expect("templates should compile");
    build_app_router(state).expect("router should build")
}

/// Write raw JSON into the timer file before the app touches it.
pub fn seed_timers(dir: &TempDir, json: &str) {
    std::fs::write(timers_path(dir), json).expect("seed timer file");
}

/// Parse the timer file as JSON.
pub fn read_timers(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("read timer file");
    serde_json::from_str(&raw).expect("timer file should be JSON")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Log in through the form and return a `Cookie` header value for the session.
pub async fn login(app: Router, username: &str, password: &str) -> String {
    let body = format!("username={username}&password={password}");
    let response = post_form(app, "/login", &body, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let id = cookie_value(&response, "respawn_session").expect("session cookie should be set");
    format!("respawn_session={id}")
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// All `Set-Cookie` values on a response.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// Value set for cookie `name`, if the response sets it.
pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    set_cookies(response).into_iter().find_map(|cookie| {
        let pair = cookie.split(';').next()?;
        let (k, v) = pair.split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}
