// Password hashing and verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::auth::error::AuthError;

/// Password service for hashing and verification
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with Argon2id and a fresh random salt
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    /// Verify a password against a stored PHC hash string
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHashError)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = PasswordService::hash_password("s3cret").unwrap();
        assert!(PasswordService::verify_password("s3cret", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = PasswordService::hash_password("s3cret").unwrap();
        assert!(!PasswordService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = PasswordService::hash_password("s3cret").unwrap();
        let second = PasswordService::hash_password("s3cret").unwrap();

        // Same password, different salt, different hash; both verify
        assert_ne!(first, second);
        assert!(PasswordService::verify_password("s3cret", &first).unwrap());
        assert!(PasswordService::verify_password("s3cret", &second).unwrap());
    }

    #[test]
    fn test_plaintext_never_appears_in_hash() {
        let hash = PasswordService::hash_password("hunter2pass").unwrap();
        assert!(!hash.contains("hunter2pass"));
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let result = PasswordService::verify_password("s3cret", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::PasswordHashError)));
    }
}
