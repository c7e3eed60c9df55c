//! Credential Hashing
//!
//! One-way, salted password hashing built on bcrypt. The cost factor is a
//! fixed contract of the credential scheme, not configuration.

use bcrypt::BcryptError;

/// bcrypt work factor for all password hashes
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password
///
/// bcrypt generates a random salt per call, so hashing the same input twice
/// yields different output.
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(false)` on mismatch. Errors only on malformed hash input,
/// which the workflow treats as an authentication failure rather than a
/// crash.
pub fn verify(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_roundtrip() {
        let hashed = hash("secret123").unwrap();
        assert!(verify("secret123", &hashed).unwrap());
        assert!(!verify("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hashed = hash("secret123").unwrap();
        assert_ne!(hashed, "secret123");
    }

    #[test]
    fn test_salt_is_random_per_call() {
        let first = hash("secret123").unwrap();
        let second = hash("secret123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_malformed_hash_errors() {
        assert!(verify("secret123", "not-a-bcrypt-hash").is_err());
    }
}
