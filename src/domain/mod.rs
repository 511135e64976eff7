//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and the audit capability
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
