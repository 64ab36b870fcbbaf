//! Appointment entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A medical appointment with a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: i32,
    /// The doctor this appointment belongs to.
    pub doctor_id: i32,
    /// Name of the client.
    pub client_name: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time.
    pub time: NaiveTime,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentData {
    /// Name of the client.
    pub client_name: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time.
    pub time: NaiveTime,
    /// Optional free-text comment.
    pub comment: Option<String>,
}
