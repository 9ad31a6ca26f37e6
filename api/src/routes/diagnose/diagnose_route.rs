//! POST: classifies a failure description into a canned diagnosis.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use diagnosis_engine::Classification;
use tracing::{debug, info, instrument, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    middleware_layer::{bearer_auth::BearerAuth, json_extractor::LenientJson},
    routes::diagnose::{diagnose_request::DiagnoseRequest, diagnose_response::DiagnoseResponse},
};

/// Handler: POST
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ \
///   -H 'content-type: application/json' \
///   -d '{"description":"La lavadora no enciende"}'
/// ```
#[instrument(
    name = "diagnose_route",
    skip_all,
    fields(auth_present = auth.present, require_auth = state.config.require_auth)
)]
pub async fn diagnose_route(
    State(state): State<Arc<AppState>>,
    auth: BearerAuth,
    LenientJson(body): LenientJson<DiagnoseRequest>,
) -> AppResult<Response> {
    if state.config.require_auth && !auth.present {
        warn!("missing bearer token");
        return Err(AppError::Unauthorized);
    }

    let description = body.description_text();
    debug!(chars = description.chars().count(), "description received");

    let Classification { branch, diagnosis } = state.rules.classify(&description);
    info!(branch = branch.as_str(), "diagnosis selected");

    Ok(
        ApiResponse::success(DiagnoseResponse::new(auth.present, diagnosis))
            .into_response_with_status(StatusCode::OK),
    )
}
