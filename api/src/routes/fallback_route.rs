use axum::http::Method;
use tracing::debug;

use crate::error_handler::AppError;

/// Handler for every method other than POST and OPTIONS.
pub async fn method_not_allowed_route(method: Method) -> AppError {
    debug!(%method, "rejecting method");
    AppError::MethodNotAllowed
}
