use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

const BEARER_PREFIX: &str = "bearer ";

/// Records whether the request carries a bearer token. Never rejects;
/// enforcement is up to the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearerAuth {
    pub present: bool,
}

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            present: has_bearer(&parts.headers),
        })
    }
}

/// `true` iff `authorization` starts with `bearer ` (scheme compared
/// case-insensitively). A header that is not valid visible ASCII counts as absent.
pub fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.get(..BEARER_PREFIX.len()))
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
}
