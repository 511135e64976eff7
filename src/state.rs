//! Shared application state: the composition root for services.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, CategoryService, PageService, ProductService, UserService,
};
use crate::config::AppSettings;
use crate::infrastructure::persistence::{
    PgAppUserRepository, PgCategoryRepository, PgPageRepository, PgProductRepository,
};

/// Services and the connection pool, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub auth_service: Arc<AuthService<PgAppUserRepository>>,
    pub user_service: Arc<UserService<PgAppUserRepository>>,
    pub category_service: Arc<CategoryService<PgCategoryRepository>>,
    pub page_service: Arc<PageService<PgPageRepository>>,
    pub product_service: Arc<ProductService<PgProductRepository, PgCategoryRepository>>,
}

impl AppState {
    /// Builds repositories over `pool` and wires them into services.
    pub fn new(pool: Arc<PgPool>, settings: AppSettings) -> Self {
        let user_repository = Arc::new(PgAppUserRepository::new(pool.clone()));
        let category_repository = Arc::new(PgCategoryRepository::new(pool.clone()));
        let page_repository = Arc::new(PgPageRepository::new(pool.clone()));
        let product_repository = Arc::new(PgProductRepository::new(pool.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(user_repository.clone(), settings)),
            user_service: Arc::new(UserService::new(user_repository)),
            category_service: Arc::new(CategoryService::new(category_repository.clone())),
            page_service: Arc::new(PageService::new(page_repository)),
            product_service: Arc::new(ProductService::new(
                product_repository,
                category_repository,
            )),
            pool,
        }
    }
}
