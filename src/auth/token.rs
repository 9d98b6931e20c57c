// JWT issuing and validation

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::error::AuthError;

/// Claims embedded in a doctor's auth token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // doctor id
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token service for signing and verifying doctor tokens
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    token_duration: i64, // seconds
}

/// Tokens live for a year; there is no refresh or revocation, a token
/// stays valid until its doctor record disappears from the store.
const TOKEN_DURATION_SECS: i64 = 365 * 24 * 60 * 60;

impl TokenService {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            token_duration: TOKEN_DURATION_SECS,
        }
    }

    /// Sign a token carrying the doctor's identity
    pub fn generate_token(&self, doctor_id: Uuid, email: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: doctor_id,
            email: email.to_string(),
            iat: now,
            exp: now + self.token_duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn test_token_expiry_is_one_year() {
        let service = test_token_service();
        let token = service
            .generate_token(Uuid::new_v4(), "doc@example.com")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 365 * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_carry_doctor_identity() {
        let service = test_token_service();
        let doctor_id = Uuid::new_v4();

        let token = service.generate_token(doctor_id, "doc@example.com").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, doctor_id);
        assert_eq!(claims.email, "doc@example.com");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let secret = "test_secret_key_for_testing_purposes";
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "doc@example.com".to_string(),
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let result = test_token_service().validate_token(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.validate_token("").is_err());
        assert!(service.validate_token("not.a.token").is_err());
        assert!(service
            .validate_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn test_signature_verification_across_secrets() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1
            .generate_token(Uuid::new_v4(), "doc@example.com")
            .unwrap();

        assert!(service1.validate_token(&token).is_ok());
        assert!(matches!(
            service2.validate_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    proptest! {
        #[test]
        fn prop_valid_tokens_round_trip(
            email in "[a-z]{3,10}@[a-z]{3,10}\\.(com|org|net)"
        ) {
            let service = test_token_service();
            let doctor_id = Uuid::new_v4();

            let token = service.generate_token(doctor_id, &email)?;
            let claims = service.validate_token(&token)?;

            prop_assert_eq!(claims.sub, doctor_id);
            prop_assert_eq!(claims.email, email);
        }

        #[test]
        fn prop_random_strings_are_rejected(
            garbage in "[a-zA-Z0-9]{10,50}"
        ) {
            let service = test_token_service();
            prop_assert!(service.validate_token(&garbage).is_err());
        }
    }
}
