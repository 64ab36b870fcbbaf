//! Appointment repository implementation.

use sqlx::PgPool;

use clinic_core::error::{AppError, ErrorKind};
use clinic_core::result::AppResult;
use clinic_entity::appointment::model::AppointmentData;
use clinic_entity::appointment::Appointment;

/// Repository for appointment CRUD operations.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an appointment by primary key.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find appointment by id", e)
            })
    }

    /// List all appointments.
    pub async fn find_all(&self) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments ORDER BY date, time")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list appointments", e)
            })
    }

    /// List all appointments for one doctor.
    pub async fn find_by_doctor(&self, doctor_id: i32) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE doctor_id = $1 ORDER BY date, time",
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list appointments by doctor", e)
        })
    }

    /// Insert a new appointment for a doctor and return the stored row.
    pub async fn create(&self, doctor_id: i32, data: &AppointmentData) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (doctor_id, client_name, date, time, comment) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(doctor_id)
        .bind(&data.client_name)
        .bind(data.date)
        .bind(data.time)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create appointment", e))
    }

    /// Replace the mutable fields of an appointment, keeping its doctor.
    /// Returns `None` when the appointment does not exist.
    pub async fn update(&self, id: i32, data: &AppointmentData) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET client_name = $2, date = $3, time = $4, \
             comment = $5, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.client_name)
        .bind(data.date)
        .bind(data.time)
        .bind(&data.comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update appointment", e))
    }

    /// Delete an appointment. Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete appointment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
