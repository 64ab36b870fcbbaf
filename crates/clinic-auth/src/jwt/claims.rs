//! JWT claims structure used in access tokens.

use serde::{Deserialize, Serialize};

/// Claims payload embedded in every access token.
///
/// The role is carried as a plain string so a token minted with a role
/// this service does not know is still parseable; the mismatch surfaces
/// when the claims are turned into a [`crate::Principal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email address.
    pub sub: String,
    /// Email address, duplicated from the subject for client convenience.
    pub email: String,
    /// Role name at the time of token issuance.
    pub role: String,
    /// Issuer of the token.
    pub iss: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
