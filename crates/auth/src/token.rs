//! HS256 session token signing and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use mesto_core::{DomainError, DomainResult, UserId};

use crate::claims::Claims;

/// Session length in seconds: the single source of truth for both token
/// validity and the session cookie max-age.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

pub fn session_ttl() -> Duration {
    Duration::seconds(SESSION_TTL_SECS)
}

/// Opaque verification failure.
///
/// Missing signature, bad signature, malformed token and expired token are
/// deliberately indistinguishable to callers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("token verification failed")]
pub struct InvalidToken;

/// Verification seam used by the request pipeline.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<UserId, InvalidToken>;
}

/// HS256 codec over a shared secret.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a token embedding `user_id`, valid for [`SESSION_TTL_SECS`].
    pub fn sign(&self, user_id: UserId, issued_at: DateTime<Utc>) -> DomainResult<String> {
        let claims = Claims::new(user_id, issued_at, session_ttl());
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| DomainError::internal(format!("token signing failed: {e}")))
    }
}

impl TokenVerifier for Hs256TokenCodec {
    fn verify(&self, token: &str) -> Result<UserId, InvalidToken> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| InvalidToken)?;
        data.claims.sub.parse().map_err(|_| InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> Hs256TokenCodec {
        Hs256TokenCodec::new(b"test-secret")
    }

    #[test]
    fn signed_token_verifies_to_the_same_identity() {
        let id = UserId::new();
        let token = codec().sign(id, Utc::now()).unwrap();

        assert_eq!(codec().verify(&token).unwrap(), id);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Issued 8 days ago, so the 7-day expiry is well past the default
        // verification leeway.
        let issued_at = Utc::now() - Duration::days(8);
        let token = codec().sign(UserId::new(), issued_at).unwrap();

        assert_eq!(codec().verify(&token), Err(InvalidToken));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = Hs256TokenCodec::new(b"other-secret")
            .sign(UserId::new(), Utc::now())
            .unwrap();

        assert_eq!(codec().verify(&token), Err(InvalidToken));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert_eq!(codec().verify("not-a-token"), Err(InvalidToken));
        assert_eq!(codec().verify(""), Err(InvalidToken));
    }
}
