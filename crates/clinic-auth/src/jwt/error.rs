//! Token error taxonomy.

use clinic_core::error::AppError;

/// Errors produced by token operations, tagged by which stage failed.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token could not be signed.
    #[error("Failed to create token: {0}")]
    Creation(String),
    /// The token payload could not be decoded into claims.
    #[error("Failed to parse token: {0}")]
    Parse(String),
    /// The token was too malformed for signature verification to run.
    #[error("Failed to verify token: {0}")]
    Verification(String),
    /// The token's expiry is in the past.
    #[error("Token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}
