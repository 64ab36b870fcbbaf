//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clinic_core::error::{AppError, ErrorKind};
use clinic_core::result::AppResult;
use clinic_entity::user::model::CreateUser;
use clinic_entity::user::User;

/// Columns selected for every user row. The stored `role_id` foreign key
/// is resolved to its `role_type` enum value so callers never see raw ids.
const USER_COLUMNS: &str = "u.id, u.name, u.email, u.password_hash, \
     r.role_type AS role, u.created_at, u.updated_at";

/// Repository for user persistence and lookup.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id WHERE u.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE LOWER(u.email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by email", e))
    }

    /// Insert a new user and return the stored row.
    ///
    /// A unique-constraint violation on the email column is surfaced as a
    /// conflict rather than a generic database error.
    pub async fn create(&self, user: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, email, password_hash, \
                 (SELECT r.role_type FROM roles r WHERE r.id = users.role_id) AS role, \
                 created_at, updated_at",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "users_email_key") {
                AppError::conflict(format!("User with email '{}' already exists", user.email))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    /// Reassign a user's role and return the updated row, or `None` when
    /// no user with that email exists.
    pub async fn update_role(&self, email: &str, role_id: i32) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET role_id = $2, updated_at = NOW() \
             WHERE LOWER(email) = LOWER($1) \
             RETURNING id, name, email, password_hash, \
                 (SELECT r.role_type FROM roles r WHERE r.id = users.role_id) AS role, \
                 created_at, updated_at",
        )
        .bind(email)
        .bind(role_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user role", e))
    }
}

/// Whether a sqlx error is a unique-constraint violation on the named
/// constraint.
fn is_unique_violation(error: &sqlx::Error, constraint: &str) -> bool {
    matches!(
        error.as_database_error().and_then(|d| d.constraint()),
        Some(c) if c == constraint
    )
}
