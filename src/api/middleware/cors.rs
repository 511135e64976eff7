//! Cross-origin resource sharing.

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin, any method, any request header.
///
/// Credentials are not allowed, so browsers must send the bearer token
/// explicitly.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
