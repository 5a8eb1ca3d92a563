//! HTTP-level integration tests for the profile endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_profile, get, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::SqlitePool;

async fn profile_rows(pool: &SqlitePool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// GET /api/profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_profile_without_profile_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/profile").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No profile found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_profile_nests_empty_collections(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    create_profile(app.clone(), "Ana", "ana@x.com").await;

    let response = get(app, "/api/profile").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["education"], "");
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());
    assert_eq!(json["skills"], json!([]));
    assert_eq!(json["projects"], json!([]));
    assert_eq!(json["links"], json!([]));
}

// ---------------------------------------------------------------------------
// POST /api/profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_overwrite_profile(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/api/profile",
        json!({"name": "Ana", "email": "ana@x.com", "education": "BSc"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["education"], "BSc");
    assert!(created["id"].is_number());

    let response = post_json(
        app.clone(),
        "/api/profile",
        json!({"name": "Bea", "email": "bea@x.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Bea");
    assert_eq!(updated["email"], "bea@x.com");
    assert_eq!(updated["education"], "");
    assert_eq!(updated["created_at"], created["created_at"]);

    assert_eq!(profile_rows(&pool).await, 1);

    let json = body_json(get(app, "/api/profile").await).await;
    assert_eq!(json["name"], "Bea");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_requires_name_and_email(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let bodies = [
        json!({"name": "", "email": "ana@x.com"}),
        json!({"name": "Ana"}),
        json!({"email": "ana@x.com", "education": "BSc"}),
        json!({}),
    ];

    for body in bodies {
        let response = post_json(app.clone(), "/api/profile", body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {body}"
        );
        let json = body_json(response).await;
        assert_eq!(json["message"], "Name and email are required");
    }

    assert_eq!(profile_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_with_malformed_body_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_raw(app.clone(), "/api/profile", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = post_raw(app, "/api/profile", r#"{"name": 5, "email": "a@x.com"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_overwrite_keeps_previous_profile(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    create_profile(app.clone(), "Ana", "ana@x.com").await;

    let response = post_json(app.clone(), "/api/profile", json!({"name": "Bea"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, "/api/profile").await).await;
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
}

// ---------------------------------------------------------------------------
// PUT /api/profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_without_profile_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/profile", json!({"name": "Ana"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "No profile found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_is_partial(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    post_json(
        app.clone(),
        "/api/profile",
        json!({"name": "Ana", "email": "ana@x.com", "education": "BSc"}),
    )
    .await;

    let response = put_json(app.clone(), "/api/profile", json!({"education": "MSc"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["education"], "MSc");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_empty_name(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    create_profile(app.clone(), "Ana", "ana@x.com").await;

    let response = put_json(app.clone(), "/api/profile", json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Name must not be empty");

    let json = body_json(get(app, "/api/profile").await).await;
    assert_eq!(json["name"], "Ana");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_education_null_is_kept_distinct_from_absent(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/profile",
        json!({"name": "Ana", "email": "ana@x.com", "education": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["education"].is_null());

    let response = put_json(app.clone(), "/api/profile", json!({"education": "BSc"})).await;
    assert_eq!(body_json(response).await["education"], "BSc");

    // Absent: unchanged.
    let response = put_json(app.clone(), "/api/profile", json!({"name": "Bea"})).await;
    assert_eq!(body_json(response).await["education"], "BSc");

    // Explicit null: cleared.
    let response = put_json(app.clone(), "/api/profile", json!({"education": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Bea");
    assert!(json["education"].is_null());

    let json = body_json(get(app, "/api/profile").await).await;
    assert!(json["education"].is_null());
}
