use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use tracing::warn;

use crate::auth::claims::Claims;
use crate::auth::jwt::{JwtKeys, TokenError};
use crate::error::ApiError;

/// Extracts and verifies the bearer token, yielding its claims.
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::AuthenticationRequired(
                "missing Authorization header",
            ))?;

        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .ok_or(ApiError::AuthenticationRequired("invalid auth scheme"))?;

        let claims = keys.verify(token).map_err(|e| {
            match e {
                TokenError::Expired => warn!("expired token"),
                TokenError::Invalid => warn!("invalid token"),
            }
            ApiError::AuthenticationRequired("invalid or expired token")
        })?;

        Ok(AuthUser(claims))
    }
}
