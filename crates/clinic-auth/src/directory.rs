//! User account lookup, registration and role reassignment.

use tracing::{info, warn};

use clinic_core::error::AppError;
use clinic_core::result::AppResult;
use clinic_database::repositories::{RoleRepository, UserRepository};
use clinic_entity::user::model::CreateUser;
use clinic_entity::user::{RoleType, User};

use crate::password::PasswordHasher;

/// Account operations backed by the user and role repositories.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: UserRepository,
    roles: RoleRepository,
    hasher: PasswordHasher,
}

impl UserDirectory {
    /// Create a new user directory.
    pub fn new(users: UserRepository, roles: RoleRepository, hasher: PasswordHasher) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }

    /// Look up a user by email and verify the supplied password.
    ///
    /// An unknown email and a wrong password produce the same error, so
    /// the response does not reveal which accounts exist.
    pub async fn find_verified_user(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email, "Login attempt for unknown email");
                return Err(AppError::authentication("Invalid email or password"));
            }
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(email, "Login attempt with wrong password");
            return Err(AppError::authentication("Invalid email or password"));
        }

        Ok(user)
    }

    /// Register a new user account with a hashed password.
    ///
    /// Self-registration with the ADMIN role is rejected; elevation goes
    /// through [`Self::reassign_role`] instead.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: RoleType,
    ) -> AppResult<User> {
        if role.is_admin() {
            return Err(AppError::authorization(
                "Self-registration with the ADMIN role is not allowed",
            ));
        }

        let role_id = self
            .roles
            .find_id(role)
            .await?
            .ok_or_else(|| role_not_found(role))?;

        let password_hash = self.hasher.hash_password(password)?;
        let created = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role_id,
            })
            .await?;

        info!(email, role = %role, "Registered new user");
        Ok(created)
    }

    /// Reassign an existing user's role.
    pub async fn reassign_role(&self, email: &str, new_role: RoleType) -> AppResult<User> {
        let role_id = self
            .roles
            .find_id(new_role)
            .await?
            .ok_or_else(|| role_not_found(new_role))?;

        let updated = self
            .users
            .update_role(email, role_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found with email: {email}")))?;

        info!(email, role = %new_role, "Reassigned user role");
        Ok(updated)
    }
}

/// A role enum value with no matching `roles` row.
fn role_not_found(role: RoleType) -> AppError {
    AppError::not_found(format!("Role not found: {role}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::error::ErrorKind;

    #[test]
    fn test_missing_role_row_is_not_found() {
        let err = role_not_found(RoleType::Admin);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Role not found: ADMIN");
    }
}
