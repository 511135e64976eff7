//! Case-insensitive routing.
//!
//! Routes are declared in lower case. Request paths are lower-cased before
//! dispatch, so `/api/Category` reaches `/api/category`. The query string is
//! left untouched.

use axum::{extract::Request, http::Uri};

/// Lower-cases the request path.
///
/// # Example
///
/// ```rust,ignore
/// let service = middleware::map_request(lowercase_path::layer).layer(router);
/// ```
pub async fn layer(mut req: Request) -> Request {
    if let Some(uri) = lowercase_uri(req.uri()) {
        *req.uri_mut() = uri;
    }
    req
}

/// Returns the rewritten URI, or `None` when the path is already lower case.
fn lowercase_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let mut path_and_query = path.to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}
