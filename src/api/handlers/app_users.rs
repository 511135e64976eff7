//! Handlers for `/api/appuser`. Every route requires a bearer token.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::app_user::{AppUserDto, CreateAppUserRequest, UpdateAppUserRequest};
use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::error::AppError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/appuser",
    tag = "appuser",
    params(PaginationParams),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ListResponse<AppUserDto>),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<AppUserDto>>, AppError> {
    let window = params.validate_and_get_offset_limit()?;
    let (items, total) = state.user_service.list(window.offset, window.limit).await?;
    Ok(Json(ListResponse::from_page(window, items, total)))
}

#[utoipa::path(
    get,
    path = "/api/appuser/{id}",
    tag = "appuser",
    params(("id" = i64, Path, description = "User id")),
    security(("bearer" = [])),
    responses(
        (status = 200, body = AppUserDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AppUserDto>, AppError> {
    Ok(Json(state.user_service.get(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/appuser",
    tag = "appuser",
    request_body = CreateAppUserRequest,
    security(("bearer" = [])),
    responses(
        (status = 201, body = AppUserDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "User name or e-mail already exists"),
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppUserRequest>,
) -> Result<(StatusCode, Json<AppUserDto>), AppError> {
    payload.validate()?;
    let user = state.user_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    put,
    path = "/api/appuser/{id}",
    tag = "appuser",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateAppUserRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, body = AppUserDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User name or e-mail already exists"),
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAppUserRequest>,
) -> Result<Json<AppUserDto>, AppError> {
    payload.validate()?;
    let user = state.user_service.update(id, payload.into()).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/api/appuser/{id}",
    tag = "appuser",
    params(("id" = i64, Path, description = "User id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
