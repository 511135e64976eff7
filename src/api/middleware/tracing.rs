//! Request spans and access logging.
//!
//! Every request runs inside an `http_request` span with the method, path and
//! an empty `user_id` field. [`super::auth::authenticate`] records `user_id`
//! once a bearer token resolves, so log lines emitted by services while
//! handling an edit name the editor.
//!
//! ```text
//! INFO http_request{method=PUT path=/api/page/3 user_id=1}: cms_rest_api::application::services::page_service: ...
//! INFO http_request{method=PUT path=/api/page/3 user_id=1}: tower_http::trace::on_response: finished processing request latency=9 ms status=200
//! ```

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds the per-request span.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            user_id = tracing::field::Empty,
        )
    }
}

/// Trace layer: responses at `INFO`, 5xx failures at `ERROR`, latency in ms.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
