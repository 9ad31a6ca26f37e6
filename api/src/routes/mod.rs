pub mod diagnose;
pub mod fallback_route;
pub mod preflight_route;
