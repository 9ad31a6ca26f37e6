pub mod core;
pub mod error_handler;
pub mod telemetry;

mod middleware_layer;
mod routes;

use std::sync::Arc;

use axum::{Router, middleware, routing::post};
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

use crate::{
    core::{app_state::AppState, config::DiagnoseConfig},
    error_handler::AppError,
    middleware_layer::{cors_layer::cors_headers, panic_handler::panic_to_response},
    routes::{
        diagnose::diagnose_route::diagnose_route, fallback_route::method_not_allowed_route,
        preflight_route::preflight_route,
    },
};

/// Build the application router.
///
/// One method-dispatched endpoint is mounted on `/` and on every other path:
/// POST diagnoses, OPTIONS answers the preflight, anything else is 405.
pub fn router(state: Arc<AppState>) -> Router {
    let endpoint = post(diagnose_route)
        .options(preflight_route)
        .fallback(method_not_allowed_route);

    let routes = Router::new()
        .route("/", endpoint.clone())
        .route("/{*path}", endpoint);

    with_service_layers(routes).with_state(state)
}

/// Wrap routes in the service middleware: panics become 500 JSON, and the
/// CORS layer sits outside it so every response carries the CORS headers.
pub fn with_service_layers<S>(routes: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(CatchPanicLayer::custom(panic_to_response))
        .layer(middleware::map_response(cors_headers))
}

/// Load config from the environment and serve until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let config = DiagnoseConfig::from_env()?;
    let state = AppState::from_config(config)?;
    let bind_address = state.config.bind_address.clone();

    info!(
        address = %bind_address,
        require_auth = state.config.require_auth,
        rules = state.rules.rules.len(),
        "starting diagnose API"
    );

    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(AppError::Bind)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("diagnose API stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            // Without a signal handler the server runs until killed.
            error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
