//! Application Configuration
//!
//! All configuration values are loaded from environment variables once at
//! startup and passed explicitly into the components that need them.
//! No hardcoded secrets.

use crate::error::AuthError;
use std::env;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JWT secret key for signing session tokens (from JWT_SECRET env var)
    ///
    /// Required. Session tokens are HMAC-signed with this key and the auth
    /// middleware verifies them with the same key.
    pub jwt_secret: String,

    /// Image-hosting account name (from UPLOAD_CLOUD_NAME env var)
    ///
    /// Required by real upload adapters; unused by in-process stand-ins.
    pub upload_cloud_name: Option<String>,

    /// Image-hosting API key (from UPLOAD_API_KEY env var)
    pub upload_api_key: Option<String>,

    /// Image-hosting API secret (from UPLOAD_API_SECRET env var)
    pub upload_api_secret: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Panics
    /// Panics if the JWT_SECRET environment variable is not set. A missing
    /// signing key is a fatal startup condition, not a per-request error.
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET")
                .expect("JWT_SECRET environment variable must be set"),
            upload_cloud_name: env::var("UPLOAD_CLOUD_NAME").ok(),
            upload_api_key: env::var("UPLOAD_API_KEY").ok(),
            upload_api_secret: env::var("UPLOAD_API_SECRET").ok(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.jwt_secret.len() < 32 {
            return Err(AuthError::Config(
                "JWT_SECRET must be at least 32 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> AppConfig {
        AppConfig {
            jwt_secret: secret.to_string(),
            upload_cloud_name: None,
            upload_api_key: None,
            upload_api_secret: None,
        }
    }

    #[test]
    fn test_config_validation() {
        let config = config_with_secret(&"a".repeat(32));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_secret() {
        let config = config_with_secret("short");
        assert!(config.validate().is_err());
    }
}
