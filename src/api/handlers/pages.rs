//! Handlers for `/api/page`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::page::{CreatePageRequest, PageDto, UpdatePageRequest};
use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::error::AppError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/page",
    tag = "page",
    params(PaginationParams),
    responses((status = 200, body = ListResponse<PageDto>))
)]
pub async fn list_pages_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<PageDto>>, AppError> {
    let window = params.validate_and_get_offset_limit()?;
    let (items, total) = state.page_service.list(window.offset, window.limit).await?;
    Ok(Json(ListResponse::from_page(window, items, total)))
}

#[utoipa::path(
    get,
    path = "/api/page/{id}",
    tag = "page",
    params(("id" = i64, Path, description = "Page id")),
    responses((status = 200, body = PageDto), (status = 404, description = "Page not found"))
)]
pub async fn get_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PageDto>, AppError> {
    Ok(Json(state.page_service.get(id).await?.into()))
}

/// Resolves a page by its public slug.
#[utoipa::path(
    get,
    path = "/api/page/slug/{slug}",
    tag = "page",
    params(("slug" = String, Path, description = "Page slug")),
    responses((status = 200, body = PageDto), (status = 404, description = "Page not found"))
)]
pub async fn get_page_by_slug_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageDto>, AppError> {
    Ok(Json(state.page_service.get_by_slug(&slug).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/page",
    tag = "page",
    request_body = CreatePageRequest,
    security(("bearer" = [])),
    responses(
        (status = 201, body = PageDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Slug already exists"),
    )
)]
pub async fn create_page_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<PageDto>), AppError> {
    payload.validate()?;
    let page = state.page_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(page.into())))
}

#[utoipa::path(
    put,
    path = "/api/page/{id}",
    tag = "page",
    params(("id" = i64, Path, description = "Page id")),
    request_body = UpdatePageRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, body = PageDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Page not found"),
        (status = 409, description = "Slug already exists"),
    )
)]
pub async fn update_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> Result<Json<PageDto>, AppError> {
    payload.validate()?;
    let page = state.page_service.update(id, payload.into()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    delete,
    path = "/api/page/{id}",
    tag = "page",
    params(("id" = i64, Path, description = "Page id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Page not found"),
    )
)]
pub async fn delete_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.page_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
