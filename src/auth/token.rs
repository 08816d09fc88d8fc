// JWT session token issuance and verification

use crate::auth::error::AuthError;
use crate::auth::models::Role;
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims: user identity, role, and a 1-hour expiry window
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// user_id
    pub sub: i32,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies signed session tokens.
///
/// The signing secret is injected at construction (from configuration at
/// startup); expired tokens require a fresh login, there is no refresh
/// mechanism.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    token_duration: i64, // seconds
}

impl TokenService {
    /// Create a TokenService with the given secret. Tokens live for 1 hour.
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            token_duration: 3600,
        }
    }

    /// Issue a session token for the given user identity and role
    pub fn issue(&self, user_id: i32, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role,
            iat: now,
            exp: now + self.token_duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
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
    fn test_token_expiration_is_one_hour() {
        let service = test_token_service();
        let token = service.issue(1, Role::Student).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_claims_carry_identity_and_role() {
        let service = test_token_service();

        let token = service.issue(42, Role::Admin).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Admin);

        let token = service.issue(7, Role::Student).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.role, Role::Student);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_token_service();

        let claims = Claims {
            sub: 1,
            role: Role::Student,
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token).unwrap_err(),
            AuthError::ExpiredToken
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenService::new("secret1".to_string());
        let verifier = TokenService::new("secret2".to_string());

        let token = issuer.issue(1, Role::Student).unwrap();
        assert!(issuer.verify(&token).is_ok());
        assert!(matches!(
            verifier.verify(&token).unwrap_err(),
            AuthError::InvalidToken
        ));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());
        assert!(service
            .verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_issued_tokens_round_trip(user_id in 1i32..1000000, admin in any::<bool>()) {
            let service = test_token_service();
            let role = if admin { Role::Admin } else { Role::Student };

            let token = service.issue(user_id, role)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.sub, user_id);
            prop_assert_eq!(claims.role, role);
        }

        #[test]
        fn prop_random_strings_are_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify(&malformed).is_err());
        }
    }
}
