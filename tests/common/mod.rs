#![allow(dead_code)]

use axum_test::TestServer;
use cms_rest_api::application::services::{UserRegistration, UserService};
use cms_rest_api::config::AppSettings;
use cms_rest_api::domain::entities::AppUser;
use cms_rest_api::infrastructure::persistence::PgAppUserRepository;
use cms_rest_api::mapping::SchemaRegistry;
use cms_rest_api::routes::{RouterOptions, app_router};
use cms_rest_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn test_settings() -> AppSettings {
    AppSettings {
        secret_key: "test-signing-secret-with-enough-bytes!".to_string(),
        token_ttl_minutes: 60,
    }
}

/// Creates every CMS table in the per-test database.
pub async fn setup_schema(pool: &PgPool) {
    SchemaRegistry::cms().unwrap().apply(pool).await.unwrap();
}

pub async fn create_test_state(pool: PgPool) -> AppState {
    setup_schema(&pool).await;
    AppState::new(Arc::new(pool), test_settings())
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, RouterOptions::default())).unwrap()
}

pub async fn create_test_user(pool: &PgPool, user_name: &str, email: &str) -> AppUser {
    let repo = Arc::new(PgAppUserRepository::new(Arc::new(pool.clone())));
    UserService::new(repo)
        .create(UserRegistration {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            image_path: None,
        })
        .await
        .unwrap()
}

/// Creates a user and returns a bearer token for it.
pub async fn create_token(state: &AppState) -> String {
    let user = create_test_user(&state.pool, "editor", "editor@example.com").await;
    state.auth_service.issue_token(&user).unwrap().token
}

pub async fn create_test_category(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_product(pool: &PgPool, category_id: i64, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (name, slug, unit_price, units_in_stock, category_id)
         VALUES ($1, $2, 19.99, 5, $3) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_page(pool: &PgPool, title: &str, slug: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO pages (title, slug, content) VALUES ($1, $2, '<p>Body</p>') RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Reads the raw status code and deletion timestamp of a row.
pub async fn raw_audit(pool: &PgPool, table: &str, id: i64) -> (i16, bool) {
    sqlx::query_as(&format!(
        "SELECT status, deleted_at IS NOT NULL FROM {table} WHERE id = $1"
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Polls until another session in this test database is blocked on a row lock.
pub async fn wait_for_lock_waiter(pool: &PgPool) {
    for _ in 0..1000 {
        let waiting: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pg_stat_activity
             WHERE datname = current_database() AND wait_event_type = 'Lock'",
        )
        .fetch_one(pool)
        .await
        .unwrap();

        if waiting > 0 {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("no session ever waited on a lock");
}
