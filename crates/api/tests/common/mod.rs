//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use folio_api::config::{CorsOrigins, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// The frontend shipped with the repository.
pub fn repo_frontend_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../frontend")
}

/// Build a test `ServerConfig` serving the frontend found under `frontend_dir`.
pub fn test_config(frontend_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: true,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        template_dir: frontend_dir.join("templates"),
        static_dir: frontend_dir.join("static"),
    }
}

/// Build the full application router, with all middleware, for `pool`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_config(pool, test_config(&repo_frontend_dir()))
}

pub fn build_test_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create the profile through the API and return its JSON.
pub async fn create_profile(app: Router, name: &str, email: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/profile",
        serde_json::json!({"name": name, "email": email}),
    )
    .await;
    body_json(response).await
}
