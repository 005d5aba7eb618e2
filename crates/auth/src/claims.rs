//! Session token claims model (transport-agnostic).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use mesto_core::UserId;

/// Claims embedded in a session token.
///
/// The authenticated user id (as 24-hex) is the sole identity claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user identifier in hex form.
    pub sub: String,

    /// Issued-at, seconds since the epoch.
    pub iat: i64,

    /// Expiration, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: UserId, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_hex(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_issued_at_plus_ttl() {
        let now = Utc::now();
        let claims = Claims::new(UserId::new(), now, Duration::days(7));

        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn subject_is_the_hex_user_id() {
        let id = UserId::new();
        let claims = Claims::new(id, Utc::now(), Duration::days(7));

        assert_eq!(claims.sub, id.to_hex());
        assert_eq!(claims.sub.len(), 24);
    }
}
