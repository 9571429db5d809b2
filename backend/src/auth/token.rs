//! Signed token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs carrying identity and role claims with a
//! fixed expiration window; there is no revocation list and no refresh.
//! Verification always yields a tagged outcome rather than panicking or
//! bubbling library errors.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::models::Claims;

/// Why a token failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Not a parseable token at all.
    Malformed,
    /// Signature does not match the configured secret.
    SignatureMismatch,
    /// Signature checks out but the token is past its expiry.
    Expired,
}

impl TokenRejection {
    /// Stable reason string used in verification envelopes.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenRejection::Malformed => "malformed",
            TokenRejection::SignatureMismatch => "signature-mismatch",
            TokenRejection::Expired => "expired",
        }
    }
}

/// Issues and verifies signed tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Build a token service from the configured secret and lifetime.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Sign a token for the given identity, expiring after the configured
    /// lifetime.
    pub fn issue(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id,
            username: username.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Check signature and expiry, returning claims or a tagged rejection.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|err| {
            match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenRejection::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    TokenRejection::SignatureMismatch
                }
                _ => TokenRejection::Malformed,
            }
        })?;

        // The decoder treats exp == now as still valid; a zero-lifetime
        // token must already count as expired.
        if data.claims.is_expired() {
            return Err(TokenRejection::Expired);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl_secs: u64) -> TokenService {
        TokenService::new("unit-test-secret", Duration::from_secs(ttl_secs))
    }

    #[test]
    fn issue_then_verify_preserves_claims() {
        let tokens = service(3600);
        let token = tokens.issue(7, "ana", "usuario").unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.role, "usuario");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn zero_lifetime_token_is_immediately_expired() {
        let tokens = service(0);
        let token = tokens.issue(7, "ana", "usuario").unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenRejection::Expired)));
    }

    #[test]
    fn foreign_secret_is_a_signature_mismatch() {
        let token = service(3600).issue(7, "ana", "usuario").unwrap();
        let other = TokenService::new("different-secret", Duration::from_secs(3600));

        assert!(matches!(
            other.verify(&token),
            Err(TokenRejection::SignatureMismatch)
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        let tokens = service(3600);
        assert!(matches!(
            tokens.verify("not-a-token"),
            Err(TokenRejection::Malformed)
        ));
        assert!(matches!(tokens.verify(""), Err(TokenRejection::Malformed)));
    }

    #[test]
    fn rejection_reasons_are_stable() {
        assert_eq!(TokenRejection::Malformed.reason(), "malformed");
        assert_eq!(TokenRejection::SignatureMismatch.reason(), "signature-mismatch");
        assert_eq!(TokenRejection::Expired.reason(), "expired");
    }
}
