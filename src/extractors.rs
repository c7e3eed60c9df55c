//! Authentication Extractors
//!
//! Axum extractors for the authenticated account id. The auth middleware
//! validates the session cookie and parks the claims in request extensions;
//! handlers only ever see the subject id.

use crate::models::Claims;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// Account id of the authenticated caller
///
/// Supplied by the auth middleware; never re-derived inside handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUserId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUserId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<Claims>().ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "message": "User not authenticated.",
                    "success": false
                })),
            )
                .into_response()
        })?;

        Ok(AuthUserId(claims.sub))
    }
}
