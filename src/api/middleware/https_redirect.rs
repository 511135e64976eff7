//! Redirects plain-HTTP requests to HTTPS.
//!
//! The service normally runs behind a TLS-terminating proxy, so the original
//! scheme is read from `X-Forwarded-Proto`. Requests without that header are
//! passed through.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Answers `308 Permanent Redirect` to the HTTPS URL when enabled and the
/// proxy reports `http`.
///
/// # Example
///
/// ```rust,ignore
/// let app = router.layer(middleware::from_fn_with_state(true, https_redirect::layer));
/// ```
pub async fn layer(State(enabled): State<bool>, req: Request, next: Next) -> Response {
    let path_and_query = req.uri().path_and_query().map(|p| p.as_str());

    if enabled && let Some(location) = https_location(req.headers(), path_and_query) {
        tracing::debug!(%location, "Redirecting to HTTPS");
        return (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response();
    }

    next.run(req).await
}

/// Builds the HTTPS URL for a request forwarded over plain HTTP.
fn https_location(headers: &HeaderMap, path_and_query: Option<&str>) -> Option<String> {
    let proto = headers.get(FORWARDED_PROTO)?.to_str().ok()?;
    if !proto.trim().eq_ignore_ascii_case("http") {
        return None;
    }

    let host = headers.get(header::HOST)?.to_str().ok()?;
    Some(format!("https://{}{}", host, path_and_query.unwrap_or("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(proto: Option<&'static str>, host: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(proto) = proto {
            headers.insert(FORWARDED_PROTO, HeaderValue::from_static(proto));
        }
        if let Some(host) = host {
            headers.insert(header::HOST, HeaderValue::from_static(host));
        }
        headers
    }

    #[test]
    fn test_http_is_redirected() {
        assert_eq!(
            https_location(&headers(Some("http"), Some("cms.example.com")), Some("/api/page?page=2")),
            Some("https://cms.example.com/api/page?page=2".to_string())
        );
    }

    #[test]
    fn test_https_passes_through() {
        assert_eq!(
            https_location(&headers(Some("https"), Some("cms.example.com")), Some("/")),
            None
        );
    }

    #[test]
    fn test_direct_requests_pass_through() {
        assert_eq!(https_location(&headers(None, Some("localhost")), Some("/")), None);
        assert_eq!(https_location(&headers(Some("http"), None), Some("/")), None);
    }
}
