//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Tables are created by [`crate::mapping::SchemaRegistry`].
//!
//! All implementations share the same lifecycle rules:
//!
//! - inserts set `status = Active` (column default) and `created_at = NOW()`
//! - updates set `status = Modified` and `updated_at = NOW()`
//! - deletes are soft: `status = Passive` and `deleted_at = NOW()`
//! - reads filter out `Passive` rows
//!
//! # Repositories
//!
//! - [`PgAppUserRepository`] - Back-office users
//! - [`PgCategoryRepository`] - Categories
//! - [`PgPageRepository`] - Content pages
//! - [`PgProductRepository`] - Products

pub mod pg_app_user_repository;
pub mod pg_category_repository;
pub mod pg_page_repository;
pub mod pg_product_repository;

pub use pg_app_user_repository::PgAppUserRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_page_repository::PgPageRepository;
pub use pg_product_repository::PgProductRepository;
