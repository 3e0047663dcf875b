use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by every bearer token.
///
/// Deliberately fixed: a subject and an absolute expiry, nothing else.
/// Tokens are not revocable, so the expiry is the only thing that ends
/// their validity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the account's email address)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims expiring `ttl` after `issued_at`.
    ///
    /// Taking the issue instant explicitly keeps token contents a pure
    /// function of its inputs, which is what the tests lean on.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Whether the expiry has passed at `now` (Unix timestamp, seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}
