//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod app_users;
pub mod auth;
pub mod categories;
pub mod health;
pub mod pages;
pub mod products;
pub mod swagger;

pub use app_users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
pub use auth::login_handler;
pub use categories::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, list_category_products_handler, update_category_handler,
};
pub use health::health_handler;
pub use pages::{
    create_page_handler, delete_page_handler, get_page_by_slug_handler, get_page_handler,
    list_pages_handler, update_page_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
pub use swagger::{openapi_json_handler, swagger_ui_handler};
