//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of privilege levels gating route access.
///
/// There is no role hierarchy: a route lists every role it accepts, and the
/// comparison is exact membership. `Anyone` is the open-route sentinel and is
/// never required to be carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleType {
    /// Open access; routes declaring this pass without a token.
    Anyone,
    /// Regular registered user.
    User,
    /// Administrator. Never assignable through self-registration.
    Admin,
}

impl RoleType {
    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anyone => "ANYONE",
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Check if this role is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = clinic_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ANYONE" => Ok(Self::Anyone),
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(clinic_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ANYONE, USER, ADMIN"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("ADMIN".parse::<RoleType>().unwrap(), RoleType::Admin);
        assert_eq!("user".parse::<RoleType>().unwrap(), RoleType::User);
        assert!("SUPERUSER".parse::<RoleType>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for role in [RoleType::Anyone, RoleType::User, RoleType::Admin] {
            assert_eq!(role.to_string().parse::<RoleType>().unwrap(), role);
        }
    }
}
