//! Session Tokens
//!
//! Signed, time-limited identity tokens and the cookie conventions used to
//! carry them. Tokens are HMAC-signed JWTs bound to an account id; the
//! signing key is process-wide configuration built once at startup.

use crate::config::AppConfig;
use crate::models::Claims;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Session token lifetime: one day
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Issues signed session tokens
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the process-wide signing secret
    pub fn new(config: &AppConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issue a token bound to an account id, expiring after [`TOKEN_TTL_SECS`]
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let exp = now + Duration::seconds(TOKEN_TTL_SECS);

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }
}

/// Verifies session tokens with the symmetric signing key
///
/// The issuer itself never verifies; this is the middleware collaborator's
/// half of the scheme.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

impl TokenVerifier {
    /// Create a verifier from the same process-wide signing secret
    pub fn new(config: &AppConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Decode and validate a session token
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}

/// Build the `Set-Cookie` value carrying a fresh session token
///
/// HTTP-only and same-site strict, expiring together with the token.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Strict",
        SESSION_COOKIE, token, TOKEN_TTL_SECS
    )
}

/// Build the `Set-Cookie` value that clears the session credential
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Strict",
        SESSION_COOKIE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            upload_cloud_name: None,
            upload_api_key: None,
            upload_api_secret: None,
        }
    }

    #[test]
    fn test_issue_and_decode() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let user_id = Uuid::new_v4();
        let token = issuer.issue(user_id).unwrap();
        let claims = verifier.decode(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_decode_rejects_wrong_key() {
        let issuer = TokenIssuer::new(&test_config());
        let other = AppConfig {
            jwt_secret: "ffffffffffffffffffffffffffffffff".to_string(),
            ..test_config()
        };
        let verifier = TokenVerifier::new(&other);

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(verifier.decode(&token).is_err());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc");
        assert!(cookie.starts_with("token=abc;"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
