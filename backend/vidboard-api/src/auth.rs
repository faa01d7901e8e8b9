//! JWT issuance and verification
//!
//! Tokens encode the user's identity only; registration and login both hand
//! the client a signed token, and the GraphQL handler resolves it back into
//! an identity per request. Any verification failure means "unauthenticated",
//! never a hard error.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::{ApiError, Result};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub iat: i64,    // Issued at
    pub exp: i64,    // Expiration time
}

/// Identity resolved from a verified bearer token, injected into the
/// GraphQL request context when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

/// Issues and verifies the signed tokens returned by register/login.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    expiry_hours: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiry_hours: config.expiry_hours,
        }
    }

    /// Produce a signed token encoding the user's identity.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Token(e.to_string()))
    }

    /// Resolve a token back into an identity. Invalid, expired, or tampered
    /// tokens all yield `None`.
    pub fn verify_token(&self, token: &str) -> Option<AuthenticatedUser> {
        let validation = Validation::new(Algorithm::HS256);
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        let data = decode::<Claims>(token, &decoding_key, &validation).ok()?;
        let id = Uuid::parse_str(&data.claims.sub).ok()?;

        Some(AuthenticatedUser { id })
    }

    /// Extract and verify the token carried in an `Authorization` header value.
    pub fn verify_bearer(&self, header: &str) -> Option<AuthenticatedUser> {
        let token = header.strip_prefix("Bearer ")?;
        self.verify_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_issuer(secret: &str) -> TokenIssuer {
        TokenIssuer::new(&JwtConfig {
            secret: secret.to_string(),
            expiry_hours: 1,
        })
    }

    #[test]
    fn issued_token_verifies_to_same_identity() {
        let issuer = test_issuer("test-secret");
        let user_id = Uuid::new_v4();

        let token = issuer.issue_token(user_id).unwrap();
        let verified = issuer.verify_token(&token).unwrap();

        assert_eq!(verified.id, user_id);
    }

    #[test]
    fn garbage_token_is_unauthenticated() {
        let issuer = test_issuer("test-secret");
        assert!(issuer.verify_token("not-a-jwt").is_none());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = test_issuer("test-secret");
        let other = test_issuer("other-secret");

        let token = other.issue_token(Uuid::new_v4()).unwrap();
        assert!(issuer.verify_token(&token).is_none());
    }

    #[test]
    fn bearer_header_must_use_bearer_scheme() {
        let issuer = test_issuer("test-secret");
        let token = issuer.issue_token(Uuid::new_v4()).unwrap();

        assert!(issuer.verify_bearer(&format!("Bearer {}", token)).is_some());
        assert!(issuer.verify_bearer(&format!("Basic {}", token)).is_none());
        assert!(issuer.verify_bearer(&token).is_none());
    }
}
