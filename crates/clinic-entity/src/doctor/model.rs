//! Doctor entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::speciality::Speciality;

/// A doctor registered with the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    /// Unique doctor identifier.
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Year of graduation.
    pub year_of_graduation: i32,
    /// Name of the clinic the doctor works at.
    pub name_of_clinic: String,
    /// Medical speciality.
    pub speciality: Speciality,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating or updating a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorData {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Year of graduation.
    pub year_of_graduation: i32,
    /// Name of the clinic.
    pub name_of_clinic: String,
    /// Medical speciality.
    pub speciality: Speciality,
}
