//! Handler for `POST /api/auth/login`.

use axum::{Json, extract::State};
use chrono::Utc;
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Request Body
///
/// ```json
/// { "login": "admin@example.com", "password": "..." }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is empty and 401 if the credentials do not match.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, body = TokenResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let (user, token) = state
        .auth_service
        .login(&payload.login, &payload.password)
        .await?;

    Ok(Json(TokenResponse {
        access_token: token.token,
        token_type: "Bearer",
        expires_in: (token.expires_at - Utc::now()).num_seconds().max(0),
        expires_at: token.expires_at,
        user: user.into(),
    }))
}
