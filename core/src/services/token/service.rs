//! JWT token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AuthError, DomainError, DomainResult};
use vi_shared::config::JwtConfig;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account email
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Service signing and validating HS256 access tokens
///
/// Tokens are stateless; nothing is persisted and there is no revocation.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    expiry_seconds: i64,
}

impl TokenService {
    /// Create a new token service from JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::default();
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            expiry_seconds: config.access_token_expiry,
        }
    }

    /// Issue a signed access token for an account
    pub fn issue_access_token(&self, email: &str) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed.into())
    }

    /// Validate a token and return its claims
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> TokenService {
        TokenService::new(&JwtConfig::new("unit-test-secret"))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = test_service();
        let token = service.issue_access_token("a@b.com").unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.iss, "voiceinvoice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_rejects_token_with_wrong_secret() {
        let token = test_service().issue_access_token("a@b.com").unwrap();

        let other = TokenService::new(&JwtConfig::new("different-secret"));
        let result = other.verify_access_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidToken))
        ));
    }

    #[test]
    fn test_rejects_garbage_token() {
        let result = test_service().verify_access_token("not.a.jwt");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let mut config = JwtConfig::new("unit-test-secret");
        config.access_token_expiry = -120; // already expired, beyond leeway
        let service = TokenService::new(&config);

        let token = service.issue_access_token("a@b.com").unwrap();
        assert!(service.verify_access_token(&token).is_err());
    }
}
