//! Integration tests for malformed requests: bad JSON, unknown fields,
//! bad path parameters, wrong methods.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, build_test_app, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: malformed JSON body returns 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let request = Request::post("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: unknown extra fields are rejected outright
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_fields_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/tasks",
        json!({ "title": "Write report", "priority": "high" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/categories",
        json!({ "name": "Work", "icon": "briefcase" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: clients cannot set server-owned fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn server_owned_fields_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/tasks",
        json!({ "title": "Write report", "id": 1, "createdAt": "2026-01-01T00:00:00Z" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: non-numeric path id returns 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/tasks/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: wrong method returns 405
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_method_returns_405(pool: PgPool) {
    let app = build_test_app(pool);

    let request = Request::delete("/tasks/pending")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: a patch touching nothing still succeeds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_patch_is_a_no_op(pool: PgPool) {
    let app = build_test_app(pool);

    let id = common::create_task(&app, "Write report", None).await;

    let response = put_json(app, &format!("/tasks/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Write report");
    assert_eq!(json["data"]["completed"], false);
}
