use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler: OPTIONS (CORS preflight). Always `200 ok`; the CORS layer adds headers.
pub async fn preflight_route() -> Response {
    (StatusCode::OK, "ok").into_response()
}
