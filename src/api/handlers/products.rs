//! Handlers for `/api/product`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::{ListResponse, PaginationParams};
use crate::api::dto::product::{CreateProductRequest, ProductDto, UpdateProductRequest};
use crate::error::AppError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/product",
    tag = "product",
    params(PaginationParams),
    responses((status = 200, body = ListResponse<ProductDto>))
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<ProductDto>>, AppError> {
    let window = params.validate_and_get_offset_limit()?;
    let (items, total) = state
        .product_service
        .list(window.offset, window.limit)
        .await?;
    Ok(Json(ListResponse::from_page(window, items, total)))
}

#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    responses((status = 200, body = ProductDto), (status = 404, description = "Product not found"))
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductDto>, AppError> {
    Ok(Json(state.product_service.get(id).await?.into()))
}

/// Creates a product inside an existing category.
///
/// Returns 400 if the price or stock is negative or the category is unknown.
#[utoipa::path(
    post,
    path = "/api/product",
    tag = "product",
    request_body = CreateProductRequest,
    security(("bearer" = [])),
    responses(
        (status = 201, body = ProductDto),
        (status = 400, description = "Validation failed or unknown category"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Slug already exists"),
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), AppError> {
    payload.validate()?;
    let product = state.product_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

#[utoipa::path(
    put,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, body = ProductDto),
        (status = 400, description = "Validation failed or unknown category"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Slug already exists"),
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductDto>, AppError> {
    payload.validate()?;
    let product = state.product_service.update(id, payload.into()).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found"),
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
