//! Interactive API documentation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

use crate::api::openapi::{ApiDoc, OPENAPI_JSON_PATH};

/// Swagger UI page.
///
/// Renders `templates/swagger.html`, which loads the OpenAPI document from
/// [`OPENAPI_JSON_PATH`].
#[derive(Template, WebTemplate)]
#[template(path = "swagger.html")]
pub struct SwaggerTemplate {
    pub title: &'static str,
    pub spec_url: &'static str,
}

/// `GET /swagger`
pub async fn swagger_ui_handler() -> impl IntoResponse {
    SwaggerTemplate {
        title: "CMS API V.1",
        spec_url: OPENAPI_JSON_PATH,
    }
}

/// `GET /swagger/cms-api/swagger.json`
pub async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
