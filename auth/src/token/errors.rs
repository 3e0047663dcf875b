use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed or its signature does not verify: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,
}
