//! Account HTTP Handlers
//!
//! REST endpoints for the account workflow. Registration and profile update
//! accept multipart bodies (text fields plus one binary attachment); login
//! is JSON. Success and error responses share the
//! `{ message, success, ... }` envelope, and the session token travels as an
//! HTTP-only cookie.

use crate::error::AuthError;
use crate::extractors::AuthUserId;
use crate::middleware;
use crate::models::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::service::AccountService;
use crate::session::{clear_session_cookie, session_cookie, TokenVerifier};
use crate::store::UserStore;
use crate::upload::{ImageUploader, UploadedFile};

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Max attachment size: 5MB
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

// ============================================
// Route Builder
// ============================================

/// Create the account routes
///
/// Register, login, and logout are public; profile update sits behind the
/// session-cookie middleware.
pub fn create_routes<S, U>(
    service: Arc<AccountService<S, U>>,
    verifier: Arc<TokenVerifier>,
) -> Router
where
    S: UserStore + 'static,
    U: ImageUploader + 'static,
{
    let public = Router::new()
        .route("/api/user/register", post(register::<S, U>))
        .route("/api/user/login", post(login::<S, U>))
        .route("/api/user/logout", get(logout));

    let protected = Router::new()
        .route("/api/user/profile/update", post(update_profile::<S, U>))
        .route_layer(axum_middleware::from_fn_with_state(
            verifier,
            middleware::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(service)
}

// ============================================
// Multipart Plumbing
// ============================================

/// Collect a multipart body into text fields plus at most one attachment
async fn collect_multipart(
    multipart: &mut Multipart,
) -> Result<(HashMap<String, String>, Option<UploadedFile>), AuthError> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AuthError::Validation(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);

        if let Some(filename) = filename {
            let data = field
                .bytes()
                .await
                .map_err(|e| AuthError::Validation(e.to_string()))?;

            if data.len() > MAX_FILE_SIZE {
                return Err(AuthError::Validation(format!(
                    "File too large. Max size: {}MB",
                    MAX_FILE_SIZE / 1024 / 1024
                )));
            }

            file = Some(UploadedFile {
                data: data.to_vec(),
                filename,
                content_type,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AuthError::Validation(e.to_string()))?;
            fields.insert(name, value);
        }
    }

    Ok((fields, file))
}

// ============================================
// Registration
// ============================================

/// POST /api/user/register
///
/// Register a new account. The multipart body carries the account fields
/// and the mandatory profile picture.
pub async fn register<S, U>(
    State(service): State<Arc<AccountService<S, U>>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AuthError>
where
    S: UserStore,
    U: ImageUploader,
{
    let (mut fields, file) = collect_multipart(&mut multipart).await?;

    let req = RegisterRequest {
        fullname: fields.remove("fullname").unwrap_or_default(),
        email: fields.remove("email").unwrap_or_default(),
        phone_number: fields.remove("phone_number").unwrap_or_default(),
        password: fields.remove("password").unwrap_or_default(),
        role: fields.remove("role").unwrap_or_default(),
    };

    let photo =
        file.ok_or_else(|| AuthError::Validation("Profile picture is required.".into()))?;

    service.register(req, photo).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Account created successfully.",
            "success": true
        })),
    ))
}

// ============================================
// Login / Logout
// ============================================

/// POST /api/user/login
///
/// Authenticate and set the session cookie. The response never discloses
/// whether the email or the password was wrong.
pub async fn login<S, U>(
    State(service): State<Arc<AccountService<S, U>>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError>
where
    S: UserStore,
    U: ImageUploader,
{
    let outcome = service.login(req).await?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(&outcome.token))],
        Json(serde_json::json!({
            "message": format!("Welcome back {}", outcome.user.fullname),
            "user": outcome.user,
            "success": true
        })),
    ))
}

/// GET /api/user/logout
///
/// Unconditionally succeeds and clears the session cookie. No store
/// interaction.
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(serde_json::json!({
            "message": "Logged out successfully.",
            "success": true
        })),
    )
}

// ============================================
// Profile Update
// ============================================

/// POST /api/user/profile/update
///
/// Partial profile update for the authenticated account. Text fields are
/// optional; an attached file is uploaded with image handling.
pub async fn update_profile<S, U>(
    State(service): State<Arc<AccountService<S, U>>>,
    AuthUserId(user_id): AuthUserId,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AuthError>
where
    S: UserStore,
    U: ImageUploader,
{
    let (mut fields, file) = collect_multipart(&mut multipart).await?;

    let req = UpdateProfileRequest {
        fullname: fields.remove("fullname"),
        email: fields.remove("email"),
        phone_number: fields.remove("phone_number"),
        bio: fields.remove("bio"),
        skills: fields.remove("skills"),
    };

    let user = service.update_profile(user_id, req, file).await?;

    Ok(Json(serde_json::json!({
        "message": "Profile updated successfully.",
        "user": user,
        "success": true
    })))
}
