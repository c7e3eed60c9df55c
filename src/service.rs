//! Account Workflow
//!
//! Core business logic for registration, login, and profile updates. Each
//! operation is single-shot request/response: one account fetched fresh from
//! the store, mutated if needed, and saved back. The service holds no state
//! between requests beyond the read-only signing key.

use crate::config::AppConfig;
use crate::error::AuthError;
use crate::models::{
    parse_skills, LoginOutcome, LoginRequest, Profile, RegisterRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::password;
use crate::session::TokenIssuer;
use crate::store::{NewUser, UserStore};
use crate::upload::{ImageUploader, UploadOptions, UploadedFile};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

/// Remote folder for files attached to profile updates
const PROFILE_UPLOAD_FOLDER: &str = "user_profiles";

/// Account workflow orchestrating store, uploader, hasher, and token issuer
pub struct AccountService<S, U> {
    store: S,
    uploader: U,
    tokens: TokenIssuer,
}

impl<S: UserStore, U: ImageUploader> AccountService<S, U> {
    /// Create the workflow from its collaborators and the process config
    pub fn new(store: S, uploader: U, config: &AppConfig) -> Self {
        Self {
            store,
            uploader,
            tokens: TokenIssuer::new(config),
        }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // ============================================
    // Registration
    // ============================================

    /// Register a new account
    ///
    /// Uploads the mandatory profile photo, refuses duplicate emails, and
    /// persists the account with a hashed password. No session is issued;
    /// the caller must log in separately.
    pub async fn register(
        &self,
        req: RegisterRequest,
        photo: UploadedFile,
    ) -> Result<UserResponse, AuthError> {
        if req.fullname.is_empty()
            || req.email.is_empty()
            || req.phone_number.is_empty()
            || req.password.is_empty()
            || req.role.is_empty()
        {
            return Err(AuthError::Validation("All fields are required.".into()));
        }

        req.validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let hosted = self
            .uploader
            .upload(&photo, UploadOptions::default())
            .await?;

        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AuthError::EmailExists);
        }

        let password_hash = password::hash(&req.password).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AuthError::Internal
        })?;

        let user = self
            .store
            .create(NewUser {
                fullname: req.fullname,
                email: req.email,
                phone_number: req.phone_number,
                password_hash,
                role: req.role,
                profile: Profile {
                    profile_photo: Some(hosted.url),
                    ..Default::default()
                },
            })
            .await?;

        tracing::info!(user_id = %user.id, "Account created");

        Ok(UserResponse::from(user))
    }

    // ============================================
    // Login / Logout
    // ============================================

    /// Authenticate an account and issue a session token
    ///
    /// Unknown email and wrong password fail identically so callers cannot
    /// probe which emails are registered. The stored role must equal the
    /// asserted role; role is part of the authentication predicate.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginOutcome, AuthError> {
        if req.email.is_empty() || req.password.is_empty() || req.role.is_empty() {
            return Err(AuthError::Validation("Something is missing".into()));
        }

        let user = self
            .store
            .find_by_email(&req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A malformed stored hash is an authentication failure, not a crash.
        let matches = password::verify(&req.password, &user.password_hash).map_err(|e| {
            tracing::error!(user_id = %user.id, "Password verification error: {:?}", e);
            AuthError::InvalidCredentials
        })?;

        if !matches {
            tracing::warn!(user_id = %user.id, "Invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        if user.role != req.role {
            tracing::warn!(user_id = %user.id, "Role mismatch at login");
            return Err(AuthError::RoleMismatch);
        }

        let token = self.tokens.issue(user.id).map_err(|e| {
            tracing::error!("Failed to issue session token: {:?}", e);
            AuthError::Internal
        })?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(LoginOutcome {
            user: UserResponse::from(user),
            token,
        })
    }

    // ============================================
    // Profile Update
    // ============================================

    /// Apply a partial profile update to an existing account
    ///
    /// Only fields present (and non-empty) in the request overwrite stored
    /// values. An attached file is uploaded with image handling and lands in
    /// the resume slot together with its original filename.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        req: UpdateProfileRequest,
        file: Option<UploadedFile>,
    ) -> Result<UserResponse, AuthError> {
        let mut user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(fullname) = present(req.fullname) {
            user.fullname = fullname;
        }
        if let Some(email) = present(req.email) {
            user.email = email;
        }
        if let Some(phone_number) = present(req.phone_number) {
            user.phone_number = phone_number;
        }
        if let Some(bio) = present(req.bio) {
            user.profile.bio = Some(bio);
        }
        if let Some(skills) = present(req.skills) {
            user.profile.skills = parse_skills(&skills);
        }

        if let Some(file) = file {
            let hosted = self
                .uploader
                .upload(
                    &file,
                    UploadOptions {
                        folder: Some(PROFILE_UPLOAD_FOLDER),
                        format: Some("jpg"),
                        all_pages: true,
                    },
                )
                .await?;

            user.profile.resume = Some(hosted.url);
            user.profile.resume_original_name = Some(file.filename);
        }

        user.updated_at = Utc::now();
        let user = self.store.save(&user).await?;

        tracing::info!(user_id = %user.id, "Profile updated");

        Ok(UserResponse::from(user))
    }
}

/// Treat empty strings as absent, matching the partial-merge contract
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
