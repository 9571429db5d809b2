//! Middleware for protecting authenticated routes.
//!
//! Extracts the bearer token from the `Authorization` header; a missing or
//! malformed header denies the request before any service logic runs.
//! Signature and expiry checks stay in the account service.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::errors::AuthError;
use crate::errors::ApiError;

/// Raw bearer token taken from the `Authorization` header.
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError(AuthError::Unauthorized))?;

        Ok(BearerToken(token.to_string()))
    }
}
