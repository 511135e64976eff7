//! Bearer token authentication and route authorization.
//!
//! Two layers run in sequence on the API router:
//!
//! 1. [`authenticate`] resolves an `Authorization: Bearer <jwt>` header into an
//!    [`AuthenticatedUser`] request extension. Requests without the header pass
//!    through anonymously.
//! 2. [`authorize`] rejects anonymous requests to routes that need a user.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Method, header},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::application::services::AuthenticatedUser;
use crate::{error::AppError, state::AppState};

/// Validates the bearer token, if any, and attaches the user to the request.
///
/// # Errors
///
/// Returns `401 Unauthorized` if an `Authorization` header is present but is
/// not a valid bearer token for a live user. A missing header is not an error
/// here; [`authorize`] decides whether the route needs one.
pub async fn authenticate(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    if parts.headers.contains_key(header::AUTHORIZATION) {
        let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Authorization header is not a bearer token"}),
                )
            })?;

        let user = st.auth_service.authenticate(&token).await?;
        tracing::Span::current().record("user_id", user.id);
        tracing::debug!(user_name = %user.user_name, "Request authenticated");
        parts.extensions.insert(user);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Rejects anonymous requests to protected routes.
///
/// # Errors
///
/// Returns `401 Unauthorized` when [`requires_user`] holds and no
/// [`AuthenticatedUser`] was attached by [`authenticate`].
pub async fn authorize(req: Request, next: Next) -> Result<Response, AppError> {
    if requires_user(req.method(), req.uri().path())
        && req.extensions().get::<AuthenticatedUser>().is_none()
    {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Authorization header is missing or invalid"}),
        ));
    }

    Ok(next.run(req).await)
}

/// Access policy for API routes.
///
/// - `/auth/login` is public
/// - everything under `/appuser` needs a user
/// - reads (`GET`, `HEAD`, `OPTIONS`) of content are public
/// - every other method needs a user
///
/// `path` may include the `/api` prefix.
pub fn requires_user(method: &Method, path: &str) -> bool {
    let path = path.strip_prefix("/api").unwrap_or(path);

    if path == "/auth/login" {
        return false;
    }

    if path == "/appuser" || path.starts_with("/appuser/") {
        return true;
    }

    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}
