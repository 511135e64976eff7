mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_login_with_email(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_user(&pool, "ada", "ada@example.com").await;
    let server = common::make_server(state);

    let response = server
        .post("/api/auth/login")
        .json(&json!({"login": "ada@example.com", "password": common::TEST_PASSWORD}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["user_name"], "ada");
    assert!(body["access_token"].as_str().unwrap().split('.').count() == 3);

    let expires_in = body["expires_in"].as_i64().unwrap();
    assert!(expires_in > 3500 && expires_in <= 3600);
}

#[sqlx::test(migrations = false)]
async fn test_login_token_opens_protected_routes(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_user(&pool, "ada", "ada@example.com").await;
    let server = common::make_server(state);

    let body: Value = server
        .post("/api/auth/login")
        .json(&json!({"login": "ada", "password": common::TEST_PASSWORD}))
        .await
        .json();
    let token = body["access_token"].as_str().unwrap().to_string();

    server
        .post("/api/category")
        .authorization_bearer(&token)
        .json(&json!({"name": "Books"}))
        .await
        .assert_status(StatusCode::CREATED);
}

#[sqlx::test(migrations = false)]
async fn test_login_wrong_password(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    common::create_test_user(&pool, "ada", "ada@example.com").await;
    let server = common::make_server(state);

    let response = server
        .post("/api/auth/login")
        .json(&json!({"login": "ada", "password": "wrong-password"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[sqlx::test(migrations = false)]
async fn test_login_unknown_user_looks_like_wrong_password(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = common::make_server(state);

    let response = server
        .post("/api/auth/login")
        .json(&json!({"login": "nobody", "password": "whatever"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[sqlx::test(migrations = false)]
async fn test_login_empty_fields(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = common::make_server(state);

    server
        .post("/api/auth/login")
        .json(&json!({"login": "", "password": ""}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = false)]
async fn test_garbage_token_is_rejected_even_on_public_route(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = common::make_server(state);

    server
        .get("/api/category")
        .authorization_bearer("not-a-jwt")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
