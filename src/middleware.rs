//! Authentication Middleware
//!
//! Session-cookie validation for protected routes. The middleware is the
//! verifying half of the token scheme: it decodes the HMAC-signed session
//! token with the same symmetric key the issuer signs with, and stores the
//! claims in request extensions for extractors.

use crate::session::{TokenVerifier, SESSION_COOKIE};

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Pull the session token out of the Cookie header
fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(SESSION_COOKIE)?
            .strip_prefix('=')
            .map(String::from)
    })
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "message": "User not authenticated.",
            "success": false
        })),
    )
        .into_response()
}

/// Require an authenticated session
///
/// Validates the session cookie and stores the decoded claims in request
/// extensions. Missing or invalid tokens produce a 401 envelope.
pub async fn require_auth(
    State(verifier): State<Arc<TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = session_token(req.headers()).ok_or_else(unauthenticated)?;

    let claims = verifier.decode(&token).map_err(|e| {
        tracing::debug!("Session token validation failed: {:?}", e);
        unauthenticated()
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
