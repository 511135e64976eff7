//! Handlers for `/api/category`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::category::{CategoryDto, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::api::dto::product::ProductDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists active categories ordered by name.
#[utoipa::path(
    get,
    path = "/api/category",
    tag = "category",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of categories", body = ListResponse<CategoryDto>),
        (status = 400, description = "Invalid pagination"),
    )
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<CategoryDto>>, AppError> {
    let window = params.validate_and_get_offset_limit()?;

    let (items, total) = state
        .category_service
        .list(window.offset, window.limit)
        .await?;

    Ok(Json(ListResponse::from_page(window, items, total)))
}

#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, body = CategoryDto),
        (status = 404, description = "Category not found"),
    )
)]
pub async fn get_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CategoryDto>, AppError> {
    let category = state.category_service.get(id).await?;
    Ok(Json(category.into()))
}

/// Lists the active products of a category.
#[utoipa::path(
    get,
    path = "/api/category/{id}/products",
    tag = "category",
    params(("id" = i64, Path, description = "Category id"), PaginationParams),
    responses(
        (status = 200, body = ListResponse<ProductDto>),
        (status = 404, description = "Category not found"),
    )
)]
pub async fn list_category_products_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<ProductDto>>, AppError> {
    let window = params.validate_and_get_offset_limit()?;

    let (items, total) = state
        .product_service
        .list_by_category(id, window.offset, window.limit)
        .await?;

    Ok(Json(ListResponse::from_page(window, items, total)))
}

#[utoipa::path(
    post,
    path = "/api/category",
    tag = "category",
    request_body = CreateCategoryRequest,
    security(("bearer" = [])),
    responses(
        (status = 201, body = CategoryDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Slug already exists"),
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), AppError> {
    payload.validate()?;

    let category = state.category_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, body = CategoryDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug already exists"),
    )
)]
pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryDto>, AppError> {
    payload.validate()?;

    let category = state.category_service.update(id, payload.into()).await?;

    Ok(Json(category.into()))
}

/// Soft-deletes an empty category.
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category still has products"),
    )
)]
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
