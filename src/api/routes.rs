//! API route configuration.
//!
//! Routes are mounted under `/api`. Access rules live in
//! [`crate::api::middleware::auth::requires_user`].

use crate::api::handlers::{
    create_category_handler, create_page_handler, create_product_handler, create_user_handler,
    delete_category_handler, delete_page_handler, delete_product_handler, delete_user_handler,
    get_category_handler, get_page_by_slug_handler, get_page_handler, get_product_handler,
    get_user_handler, list_categories_handler, list_category_products_handler,
    list_pages_handler, list_products_handler, list_users_handler, login_handler,
    update_category_handler, update_page_handler, update_product_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /auth/login`               - Exchange credentials for a token
/// - `GET    /appuser`                  - List users
/// - `POST   /appuser`                  - Create a user
/// - `GET|PUT|DELETE /appuser/{id}`     - Read, update or delete a user
/// - `GET    /category`                 - List categories
/// - `POST   /category`                 - Create a category
/// - `GET|PUT|DELETE /category/{id}`    - Read, update or delete a category
/// - `GET    /category/{id}/products`   - Products of a category
/// - `GET    /page`                     - List pages
/// - `POST   /page`                     - Create a page
/// - `GET|PUT|DELETE /page/{id}`        - Read, update or delete a page
/// - `GET    /page/slug/{slug}`         - Page by slug
/// - `GET    /product`                  - List products
/// - `POST   /product`                  - Create a product
/// - `GET|PUT|DELETE /product/{id}`     - Read, update or delete a product
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route(
            "/appuser",
            get(list_users_handler).post(create_user_handler),
        )
        .route(
            "/appuser/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/category",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/category/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .route(
            "/category/{id}/products",
            get(list_category_products_handler),
        )
        .route("/page", get(list_pages_handler).post(create_page_handler))
        .route(
            "/page/{id}",
            get(get_page_handler)
                .put(update_page_handler)
                .delete(delete_page_handler),
        )
        .route("/page/slug/{slug}", get(get_page_by_slug_handler))
        .route(
            "/product",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/product/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}
