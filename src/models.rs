//! Account Models
//!
//! Data structures for accounts, requests, responses, and JWT claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ============================================
// Persisted Entities
// ============================================

/// Nested profile record on an account
///
/// Every field is optional or defaults to empty; profile data accretes over
/// time through partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub profile_photo: Option<String>,
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
}

/// User account as persisted by the store
///
/// `role` is a free-form string on purpose: the valid set ("applicant",
/// "recruiter", ...) is caller-defined configuration, not a closed enum in
/// this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Request DTOs
// ============================================

/// Registration request (multipart text fields)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "All fields are required."))]
    pub fullname: String,

    #[validate(email(message = "Invalid email format."))]
    pub email: String,

    #[validate(length(min = 1, message = "All fields are required."))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "All fields are required."))]
    pub password: String,

    #[validate(length(min = 1, message = "All fields are required."))]
    pub role: String,
}

/// Login request
///
/// Fields default to empty so that absent JSON keys reach the workflow's
/// own required-field check instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub role: String,
}

/// Profile update request (multipart text fields, all optional)
///
/// Absent fields leave the stored value untouched. `skills` arrives as a
/// single comma-separated string and is split into tokens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
}

/// Split a comma-separated skills string into trimmed, non-empty tokens
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ============================================
// Response DTOs
// ============================================

/// Sanitized account view returned to callers
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub profile: Profile,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname,
            email: user.email,
            phone_number: user.phone_number,
            role: user.role,
            profile: user.profile,
        }
    }
}

/// Successful login: sanitized account plus the session token
///
/// The transport layer delivers the token as an HTTP-only cookie.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserResponse,
    pub token: String,
}

// ============================================
// JWT Claims
// ============================================

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: Uuid,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            fullname: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone_number: "555".into(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".into(),
            role: "applicant".into(),
            profile: Profile::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(
            parse_skills("rust, sql ,, async"),
            vec!["rust".to_string(), "sql".to_string(), "async".to_string()]
        );
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ").is_empty());
    }

    #[test]
    fn test_user_serialization_omits_password_hash() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$"));
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("Jane Doe"));
    }

    #[test]
    fn test_register_request_validation() {
        let req = RegisterRequest {
            fullname: "".into(),
            email: "jane@x.com".into(),
            phone_number: "555".into(),
            password: "secret123".into(),
            role: "applicant".into(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            fullname: "Jane Doe".into(),
            ..req
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_malformed_email() {
        let req = RegisterRequest {
            fullname: "Jane Doe".into(),
            email: "not-an-email".into(),
            phone_number: "555".into(),
            password: "secret123".into(),
            role: "applicant".into(),
        };
        assert!(req.validate().is_err());
    }
}
