//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access per entity. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`AppUserRepository`] - Back-office users
//! - [`CategoryRepository`] - Product categories
//! - [`PageRepository`] - Content pages
//! - [`ProductRepository`] - Catalogue products
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod app_user_repository;
pub mod category_repository;
pub mod page_repository;
pub mod product_repository;

pub use app_user_repository::AppUserRepository;
pub use category_repository::CategoryRepository;
pub use page_repository::PageRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use app_user_repository::MockAppUserRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use page_repository::MockPageRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
