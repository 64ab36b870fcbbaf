//! Role-based access gate for bearer tokens.

use clinic_core::error::AppError;
use clinic_core::result::AppResult;
use clinic_entity::user::RoleType;

use crate::jwt::TokenCodec;
use crate::principal::Principal;

/// Roles accepted on endpoints open to any authenticated user.
pub const USER_OR_ADMIN: &[RoleType] = &[RoleType::User, RoleType::Admin];

/// Roles accepted on administrative endpoints.
pub const ADMIN_ONLY: &[RoleType] = &[RoleType::Admin];

/// Decides whether a bearer token grants access to an endpoint.
///
/// A request walks through up to four checks, each with its own
/// terminal outcome: missing token, bad signature and expired token all
/// fail authentication; a valid token with a role outside the allowed
/// set fails authorization. Role matching is exact set membership, with
/// no hierarchy between roles.
///
/// Routes open to the anonymous public never consult the gate; they are
/// registered without it. Inside the gate the ANYONE sentinel therefore
/// means "any authenticated principal": it waives the role check, never
/// the token checks.
#[derive(Debug, Clone)]
pub struct AccessGate {
    codec: TokenCodec,
}

impl AccessGate {
    /// Create a new access gate.
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Full authorization check: token presence, signature, expiry and
    /// role membership, in that order.
    pub fn authorize(&self, token: Option<&str>, allowed: &[RoleType]) -> AppResult<Principal> {
        let token = token.ok_or_else(|| AppError::authentication("Authentication required"))?;
        let principal = self.verify_bearer(token)?;
        self.require_role(&principal, allowed)?;
        Ok(principal)
    }

    /// Authenticate a bearer token: signature, then expiry, then claims.
    pub fn verify_bearer(&self, token: &str) -> AppResult<Principal> {
        if !self.codec.verify_signature(token)? {
            return Err(AppError::authentication("Invalid token signature"));
        }
        if !self.codec.is_not_expired(token)? {
            return Err(AppError::authentication("Token has expired"));
        }
        Ok(self.codec.parse_principal(token)?)
    }

    /// Check that the principal's role is in the allowed set.
    ///
    /// The ANYONE sentinel in the allowed set admits every authenticated
    /// principal regardless of role.
    pub fn require_role(&self, principal: &Principal, allowed: &[RoleType]) -> AppResult<()> {
        if allowed.contains(&RoleType::Anyone) || allowed.contains(&principal.role) {
            return Ok(());
        }
        Err(AppError::authorization(format!(
            "Access denied: role {} is not permitted for this operation",
            principal.role
        )))
    }
}
