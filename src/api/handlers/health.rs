//! `GET /health`

use axum::{Json, extract::State, http::StatusCode};
use sqlx::PgPool;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ServiceStatus};
use crate::mapping::SchemaRegistry;
use crate::state::AppState;

/// Reports database connectivity and schema state.
///
/// Answers `200` when every check passes and `503` otherwise; the body has the
/// same shape in both cases.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "schema": { "status": "ok", "message": "4 tables" }
///   }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, body = HealthResponse, description = "Degraded"),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state.pool).await;
    let schema = if database.is_ok() {
        check_schema(&state.pool).await
    } else {
        CheckStatus::error("Skipped: database unavailable")
    };

    let healthy = database.is_ok() && schema.is_ok();
    if !healthy {
        tracing::warn!(?database, ?schema, "Health check degraded");
    }

    let response = HealthResponse {
        status: if healthy {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database, schema },
    };

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}

async fn check_database(pool: &PgPool) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}

async fn check_schema(pool: &PgPool) -> CheckStatus {
    let registry = match SchemaRegistry::cms() {
        Ok(registry) => registry,
        Err(e) => return CheckStatus::error(e.to_string()),
    };

    match registry.verify_database(pool).await {
        Ok(violations) if violations.is_empty() => {
            CheckStatus::ok(format!("{} tables", registry.tables().len()))
        }
        Ok(violations) => {
            CheckStatus::error(format!("{} audit column violation(s)", violations.len()))
        }
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}
