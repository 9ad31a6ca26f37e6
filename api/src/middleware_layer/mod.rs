pub mod bearer_auth;
pub mod cors_layer;
pub mod json_extractor;
pub mod panic_handler;
