use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token lifetime used when the caller does not override it.
pub const DEFAULT_TTL_MINUTES: i64 = 60;

/// Issues and verifies signed bearer tokens.
///
/// Tokens are JWTs signed with HS256 over a shared secret. A token moves
/// through exactly one lifecycle: issued, valid while `now < exp`, expired
/// afterwards. There is no revocation.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from the shared signing secret.
    ///
    /// The secret should be at least 32 bytes for HS256 and must come from
    /// configuration, never from a compiled-in literal.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - serialization or signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.encode(&Claims::new(subject, Utc::now(), ttl))
    }

    /// Sign an explicit claim set.
    ///
    /// `issue` is the normal entry point; this exists so callers (and tests)
    /// can pin the issue instant.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    /// * `Expired` - the expiry has passed
    /// * `Malformed` - the token cannot be parsed or was not signed with
    ///   this service's secret
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is exact; the default 60s grace would let dead tokens
        // through.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
