// Bastion — End-to-end API tests
//
// Drives the assembled router against a file-backed database, covering the
// full register/login scenario and durability across reopened handles.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use bastion::server::{router, AppState};
use bastion::store::{Database, SqliteAccountStore};

fn build_app(db_file: &std::path::Path, static_dir: Option<&std::path::Path>) -> Router {
    let db = Database::open(db_file).unwrap();
    let state = AppState {
        store: Arc::new(SqliteAccountStore::new(Arc::new(db))),
    };
    router(state, static_dir)
}

async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn full_register_login_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(&dir.path().join("accounts.db"), None);

    // Register a fresh account
    let (status, body) =
        post_json(&app, "/api/register", r#"{"username":"alice","password":"s3cret"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["userId"].is_i64(), "userId must be an integer id");

    // Login with the right credentials
    let (status, _) =
        post_json(&app, "/api/login", r#"{"username":"alice","password":"s3cret"}"#).await;
    assert_eq!(status, StatusCode::OK);

    // Wrong password
    let (status, _) =
        post_json(&app, "/api/login", r#"{"username":"alice","password":"wrong"}"#).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Unknown username
    let (status, _) = post_json(&app, "/api/login", r#"{"username":"bob","password":"x"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Duplicate registration
    let (status, _) =
        post_json(&app, "/api/register", r#"{"username":"alice","password":"other"}"#).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Empty username
    let (status, _) =
        post_json(&app, "/api/register", r#"{"username":"","password":"x"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn accounts_survive_a_reopened_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_file = dir.path().join("accounts.db");

    let app = build_app(&db_file, None);
    let (status, _) =
        post_json(&app, "/api/register", r#"{"username":"carol","password":"pw123"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    drop(app);

    // A second handle over the same file sees the account
    let reopened = build_app(&db_file, None);
    let (status, _) =
        post_json(&reopened, "/api/login", r#"{"username":"carol","password":"pw123"}"#).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn static_assets_are_served_on_fallback_routes() {
    let dir = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    std::fs::write(assets.path().join("index.html"), "<h1>fleet</h1>").unwrap();

    let app = build_app(&dir.path().join("accounts.db"), Some(assets.path()));

    let request = Request::builder()
        .method("GET")
        .uri("/index.html")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>fleet</h1>");

    // API routes still win over the static fallback
    let (status, _) =
        post_json(&app, "/api/register", r#"{"username":"dave","password":"pw"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
}
