pub mod diagnose_request;
pub mod diagnose_response;
pub mod diagnose_route;
