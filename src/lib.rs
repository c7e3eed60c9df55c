//! Job-Portal Account Service
//!
//! Authentication and profile-mutation workflow for a job-portal backend:
//! - Account registration with mandatory profile photo upload
//! - Login with bcrypt password verification and role checking
//! - Signed, 1-day session tokens delivered as HTTP-only cookies
//! - Logout via cookie clearing
//! - Partial profile updates with optional file attachment
//!
//! Persistence and object storage are ports: the crate defines the
//! [`store::UserStore`] and [`upload::ImageUploader`] contracts and ships an
//! in-process [`store::MemoryStore`] for tests and demos; real drivers and
//! SDK adapters live with their collaborators.
//!
//! # Configuration
//!
//! Loaded once from the environment at startup:
//! - `JWT_SECRET` - secret key for signing session tokens (required, min 32 chars)
//! - `UPLOAD_CLOUD_NAME` / `UPLOAD_API_KEY` / `UPLOAD_API_SECRET` -
//!   image-hosting credentials, required by real upload adapters
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobportal_auth::{create_routes, AccountService, AppConfig, MemoryStore, TokenVerifier};
//! use std::sync::Arc;
//!
//! let config = AppConfig::from_env();
//! config.validate()?;
//!
//! let service = Arc::new(AccountService::new(MemoryStore::new(), uploader, &config));
//! let verifier = Arc::new(TokenVerifier::new(&config));
//! let app = create_routes(service, verifier);
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod session;
pub mod store;
pub mod upload;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::AuthError;
pub use extractors::AuthUserId;
pub use handlers::create_routes;
pub use models::*;
pub use service::AccountService;
pub use session::{TokenIssuer, TokenVerifier, SESSION_COOKIE, TOKEN_TTL_SECS};
pub use store::{MemoryStore, NewUser, StoreError, UserStore};
pub use upload::{ImageUploader, UploadError, UploadOptions, UploadedFile, UploadedImage};
