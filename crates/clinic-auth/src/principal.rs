//! The authenticated identity carried through a request.

use serde::{Deserialize, Serialize};

use clinic_entity::user::RoleType;

/// Identity extracted from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Email address the token was issued for.
    pub email: String,
    /// Role granted at the time of issuance.
    pub role: RoleType,
}

impl Principal {
    /// Create a new principal.
    pub fn new(email: impl Into<String>, role: RoleType) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }
}
