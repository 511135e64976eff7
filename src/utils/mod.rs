//! Utility functions shared across layers.
//!
//! - [`db_error`] - PostgreSQL constraint violation classification
//! - [`password`] - Salted password hashing and verification
//! - [`slug`] - URL slug generation and validation

pub mod db_error;
pub mod password;
pub mod slug;
