use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::ApiError;

/// Caller's `Authorization` header, forwarded verbatim to the upstream store.
/// The proxy only checks that it is present; the upstream decides if it is valid.
#[derive(Clone, Debug)]
pub struct AuthToken(pub String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let value = header
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

        if value.trim().is_empty() {
            return Err(ApiError::unauthorized("Empty Authorization header"));
        }

        Ok(AuthToken(value.to_string()))
    }
}
