use axum::response::Response;

use crate::core::http::cors::apply_cors;

/// `map_response` middleware stamping the CORS headers on every response.
pub async fn cors_headers<B>(mut res: Response<B>) -> Response<B> {
    apply_cors(res.headers_mut());
    res
}
