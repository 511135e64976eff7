mod common;

use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_health_reports_database(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["schema"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test(migrations = false)]
async fn test_health_degraded_when_pool_closed(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    state.pool.close().await;
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
    assert_eq!(body["checks"]["schema"]["status"], "error");
}

#[sqlx::test(migrations = false)]
async fn test_health_degraded_without_schema(pool: PgPool) {
    let state = cms_rest_api::state::AppState::new(
        std::sync::Arc::new(pool),
        common::test_settings(),
    );
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["schema"]["status"], "error");
}
