//! Account Workflow Error Types
//!
//! Centralized error handling for all account operations. Every expected
//! failure maps to a structured `{ message, success: false }` response;
//! upstream and internal failures collapse to a generic 500 body that never
//! exposes internal detail.

use crate::store::StoreError;
use crate::upload::UploadError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Account workflow errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),

    /// An account with the requested email already exists
    #[error("User already exists with this email.")]
    EmailExists,

    /// Unknown email or wrong password. The message is deliberately the
    /// same for both cases to prevent account enumeration.
    #[error("Incorrect email or password.")]
    InvalidCredentials,

    /// Credentials were correct but the stored role differs from the role
    /// asserted at login
    #[error("Account doesn't exist with current role.")]
    RoleMismatch,

    /// No account matches the requested id
    #[error("User not found.")]
    UserNotFound,

    /// Store or upload adapter failure
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal error
    #[error("Internal error")]
    Internal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::EmailExists
            | AuthError::InvalidCredentials
            | AuthError::RoleMismatch => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AuthError::Upstream(_) | AuthError::Config(_) | AuthError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred.".to_string(),
            ),
        };

        (
            status,
            Json(serde_json::json!({
                "message": message,
                "success": false
            })),
        )
            .into_response()
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => AuthError::EmailExists,
            StoreError::Backend(msg) => {
                tracing::error!("Store error: {}", msg);
                AuthError::Upstream(msg)
            }
        }
    }
}

impl From<UploadError> for AuthError {
    fn from(err: UploadError) -> Self {
        tracing::error!("Upload adapter error: {}", err);
        AuthError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AuthError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let (status, body) = body_json(AuthError::EmailExists).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User already exists with this email.");
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let (status, _) = body_json(AuthError::UserNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upstream_detail_is_hidden() {
        let (status, body) = body_json(AuthError::Upstream("pool exhausted".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["message"].as_str().unwrap();
        assert!(!message.contains("pool exhausted"));
    }

    #[test]
    fn test_duplicate_store_error_maps_to_email_exists() {
        let err: AuthError = StoreError::Duplicate("jane@x.com".into()).into();
        assert!(matches!(err, AuthError::EmailExists));
    }
}
