//! Converts handler panics into JSON 500 responses.

use std::any::Any;

use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use serde_json::json;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::AppError;

/// Builds the panic response. In development the panic message is included
/// in `details`; otherwise the body is a generic internal error.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    expose_details: bool,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let message = panic_message(err.as_ref());
        tracing::error!(panic = %message, "Request handler panicked");

        let details = if self.expose_details {
            json!({"panic": message})
        } else {
            json!({})
        };

        AppError::internal("Internal server error", details).into_response()
    }
}

/// Catches panics from everything it wraps.
pub fn layer(development: bool) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder {
        expose_details: development,
    })
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
