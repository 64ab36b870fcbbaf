//! Role repository implementation.
//!
//! Roles are seeded reference data; the repository only resolves a role
//! name to its primary key for foreign-key assignment.

use sqlx::PgPool;

use clinic_core::error::{AppError, ErrorKind};
use clinic_core::result::AppResult;
use clinic_entity::user::RoleType;

/// Repository for role lookups.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a role to its row id, if the role is seeded.
    pub async fn find_id(&self, role: RoleType) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>("SELECT id FROM roles WHERE role_type = $1")
            .bind(role)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role", e))
    }
}
