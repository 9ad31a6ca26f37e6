use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error_handler::AppError;

/// Turn a handler panic into `500 {"error": "<panic message>"}`.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_to_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(%message, "request handler panicked");
    AppError::Internal(message).into_response()
}
