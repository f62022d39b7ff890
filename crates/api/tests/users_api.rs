//! HTTP-level integration tests for the `/api/users` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, delete, get, post_json};
use sqlx::PgPool;

async fn create_user(pool: &PgPool, email: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/users", serde_json::json!({ "email": email })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_returns_201(pool: PgPool) {
    let json = create_user(&pool, "ana@example.com").await;

    assert!(json["id"].is_number());
    assert_eq!(json["email"], "ana@example.com");
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_stores_lowercase_email(pool: PgPool) {
    let json = create_user(&pool, "Ana.Maria@Example.COM").await;
    assert_eq!(json["email"], "ana.maria@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_invalid_email_returns_400(pool: PgPool) {
    for email in ["not-an-email", "ana@example", "ana @example.com", ""] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/users", serde_json::json!({ "email": email })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "email: {email:?}");

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid email");
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_missing_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/users", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_wrong_type_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/users", serde_json::json!({ "email": 42 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_without_content_type_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .body(Body::from(r#"{"email": "ana@example.com"}"#))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_email_returns_409(pool: PgPool) {
    create_user(&pool, "dup@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/users",
        serde_json::json!({ "email": "DUP@example.com" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Email already exists");
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/users").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_ordered_by_id(pool: PgPool) {
    let first = create_user(&pool, "zed@example.com").await;
    let second = create_user(&pool, "amy@example.com").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], first["id"]);
    assert_eq!(users[1]["id"], second["id"]);
    assert_eq!(users[0]["email"], "zed@example.com");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user_returns_204(pool: PgPool) {
    let created = create_user(&pool, "bye@example.com").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/users").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/users/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_with_non_integer_id_returns_400(pool: PgPool) {
    for id in ["abc", "1.5"] {
        let app = common::build_test_app(pool.clone());
        let response = delete(app, &format!("/api/users/{id}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id: {id}");

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid id");
    }
}
