//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are validated with `validator` and converted into domain input
//! types through `From`. Entities are projected into response DTOs the same way,
//! so audit internals and password hashes never leave the service.

pub mod app_user;
pub mod audit;
pub mod auth;
pub mod category;
pub mod health;
pub mod page;
pub mod pagination;
pub mod product;
pub mod trimmed;
