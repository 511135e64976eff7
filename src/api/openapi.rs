//! OpenAPI document for the CMS API.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::app_user::{AppUserDto, CreateAppUserRequest, UpdateAppUserRequest};
use crate::api::dto::audit::AuditDto;
use crate::api::dto::auth::{LoginRequest, TokenResponse};
use crate::api::dto::category::{CategoryDto, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::dto::health::{
    CheckState, CheckStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::api::dto::page::{CreatePageRequest, PageDto, UpdatePageRequest};
use crate::api::dto::product::{CreateProductRequest, ProductDto, UpdateProductRequest};
use crate::api::handlers;
use crate::domain::entities::Status;

/// Where the generated document is served.
pub const OPENAPI_JSON_PATH: &str = "/swagger/cms-api/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CMS API",
        version = "V.1",
        description = "Content management REST API for users, categories, pages and products.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    paths(
        handlers::auth::login_handler,
        handlers::app_users::list_users_handler,
        handlers::app_users::get_user_handler,
        handlers::app_users::create_user_handler,
        handlers::app_users::update_user_handler,
        handlers::app_users::delete_user_handler,
        handlers::categories::list_categories_handler,
        handlers::categories::get_category_handler,
        handlers::categories::list_category_products_handler,
        handlers::categories::create_category_handler,
        handlers::categories::update_category_handler,
        handlers::categories::delete_category_handler,
        handlers::pages::list_pages_handler,
        handlers::pages::get_page_handler,
        handlers::pages::get_page_by_slug_handler,
        handlers::pages::create_page_handler,
        handlers::pages::update_page_handler,
        handlers::pages::delete_page_handler,
        handlers::products::list_products_handler,
        handlers::products::get_product_handler,
        handlers::products::create_product_handler,
        handlers::products::update_product_handler,
        handlers::products::delete_product_handler,
        handlers::health::health_handler,
    ),
    components(schemas(
        Status,
        AuditDto,
        AppUserDto,
        CreateAppUserRequest,
        UpdateAppUserRequest,
        CategoryDto,
        CreateCategoryRequest,
        UpdateCategoryRequest,
        PageDto,
        CreatePageRequest,
        UpdatePageRequest,
        ProductDto,
        CreateProductRequest,
        UpdateProductRequest,
        LoginRequest,
        TokenResponse,
        HealthResponse,
        HealthChecks,
        CheckStatus,
        CheckState,
        ServiceStatus,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Sign in"),
        (name = "appuser", description = "Back-office users"),
        (name = "category", description = "Product categories"),
        (name = "page", description = "Content pages"),
        (name = "product", description = "Catalogue products"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT security scheme referenced by protected operations.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
