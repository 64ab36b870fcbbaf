//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::RoleType;

/// A registered user of the clinic API.
///
/// Each user carries exactly one role at a time; reassignment replaces the
/// previous role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Human-readable display name.
    pub name: String,
    /// Email address (unique login identity).
    pub email: String,
    /// Argon2 password hash (salt embedded in the PHC string).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The user's single role.
    pub role: RoleType,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Resolved role reference (row ID in the `roles` table).
    pub role_id: i32,
}
