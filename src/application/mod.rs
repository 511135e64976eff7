//! Application layer services implementing business logic.
//!
//! Services validate input, derive slugs, enforce cross-entity rules and
//! coordinate repository calls. They consume repository traits, so handlers
//! and tests can swap the storage backend.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential checks and access tokens
//! - [`services::user_service::UserService`] - Back-office users
//! - [`services::category_service::CategoryService`] - Product categories
//! - [`services::page_service::PageService`] - Content pages
//! - [`services::product_service::ProductService`] - Catalogue products

pub mod services;
