//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, authorization, CORS, HTTPS redirection, path
//! case folding, panic handling and observability middleware.

pub mod auth;
pub mod cors;
pub mod https_redirect;
pub mod lowercase_path;
pub mod panic;
pub mod tracing;
