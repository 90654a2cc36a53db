//! Bearer-token user identification.
//!
//! The user identity is the `sub` claim of the externally-issued JWT in the
//! `Authorization` header. Signature verification happens upstream (API
//! gateway); this module only extracts the subject, as a stateless pure
//! function wrapped in an axum extractor. A client-supplied user id in a
//! request body is never trusted.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

use crate::error::ApiError;

/// Failure to identify the caller from the Authorization header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,
    #[error("malformed bearer token")]
    MalformedToken,
    #[error("token payload has no subject claim")]
    MissingSubject,
}

/// Extract the subject claim from a `Bearer <jwt>` header value.
pub fn user_id_from_bearer(header: &str) -> Result<String, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedToken)?;
    let payload = token
        .split('.')
        .nth(1)
        .ok_or(AuthError::MalformedToken)?;
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    let claims: serde_json::Value =
        serde_json::from_slice(&decoded).map_err(|_| AuthError::MalformedToken)?;
    claims
        .get("sub")
        .and_then(|sub| sub.as_str())
        .filter(|sub| !sub.is_empty())
        .map(str::to_owned)
        .ok_or(AuthError::MissingSubject)
}

/// The authenticated caller, identified by the token's subject claim.
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized(AuthError::MissingHeader.to_string()))?;

        user_id_from_bearer(header)
            .map(|user_id| {
                crate::telemetry::record_user_id(&user_id);
                AuthUser(user_id)
            })
            .map_err(|err| ApiError::Unauthorized(err.to_string()))
    }
}
