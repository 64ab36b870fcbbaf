//! Doctor repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use clinic_core::error::{AppError, ErrorKind};
use clinic_core::result::AppResult;
use clinic_entity::doctor::model::DoctorData;
use clinic_entity::doctor::{Doctor, Speciality};

/// Repository for doctor CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DoctorRepository {
    pool: PgPool,
}

impl DoctorRepository {
    /// Create a new doctor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a doctor by primary key.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find doctor by id", e)
            })
    }

    /// List all doctors.
    pub async fn find_all(&self) -> AppResult<Vec<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list doctors", e))
    }

    /// List doctors filtered by speciality.
    pub async fn find_by_speciality(&self, speciality: Speciality) -> AppResult<Vec<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE speciality = $1 ORDER BY id")
            .bind(speciality)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list doctors by speciality", e)
            })
    }

    /// List doctors born on an exact date.
    pub async fn find_by_birthdate(&self, date: NaiveDate) -> AppResult<Vec<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE date_of_birth = $1 ORDER BY id")
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list doctors by birthdate", e)
            })
    }

    /// List doctors born within an inclusive date range.
    pub async fn find_by_birthdate_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Doctor>> {
        sqlx::query_as::<_, Doctor>(
            "SELECT * FROM doctors WHERE date_of_birth BETWEEN $1 AND $2 ORDER BY id",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list doctors by birthdate range",
                e,
            )
        })
    }

    /// Insert a new doctor and return the stored row.
    pub async fn create(&self, data: &DoctorData) -> AppResult<Doctor> {
        sqlx::query_as::<_, Doctor>(
            "INSERT INTO doctors (name, date_of_birth, year_of_graduation, name_of_clinic, speciality) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.date_of_birth)
        .bind(data.year_of_graduation)
        .bind(&data.name_of_clinic)
        .bind(data.speciality)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create doctor", e))
    }

    /// Replace all mutable fields of a doctor. Returns `None` when the
    /// doctor does not exist.
    pub async fn update(&self, id: i32, data: &DoctorData) -> AppResult<Option<Doctor>> {
        sqlx::query_as::<_, Doctor>(
            "UPDATE doctors SET name = $2, date_of_birth = $3, year_of_graduation = $4, \
             name_of_clinic = $5, speciality = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.date_of_birth)
        .bind(data.year_of_graduation)
        .bind(&data.name_of_clinic)
        .bind(data.speciality)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update doctor", e))
    }

    /// Delete a doctor. Dependent appointments are removed by the
    /// cascading foreign key. Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete doctor", e))?;

        Ok(result.rows_affected() > 0)
    }
}
