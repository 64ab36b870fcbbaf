//! Response DTOs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clinic_auth::principal::Principal;
use clinic_entity::appointment::Appointment;
use clinic_entity::doctor::{Doctor, Speciality};
use clinic_entity::user::{RoleType, User};

/// Returned by register and login: a fresh bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT access token.
    pub token: String,
    /// Email the token was issued for.
    pub email: String,
}

/// Returned by role reassignment: the updated principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    /// Account email.
    pub email: String,
    /// Newly effective role.
    pub role: RoleType,
}

impl From<Principal> for PrincipalResponse {
    fn from(p: Principal) -> Self {
        Self {
            email: p.email,
            role: p.role,
        }
    }
}

/// Public view of a user account. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Effective role.
    pub role: RoleType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Public view of a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorResponse {
    /// Doctor identifier.
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Graduation year.
    pub year_of_graduation: i32,
    /// Clinic name.
    pub name_of_clinic: String,
    /// Medical speciality.
    pub speciality: Speciality,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Doctor> for DoctorResponse {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id,
            name: d.name,
            date_of_birth: d.date_of_birth,
            year_of_graduation: d.year_of_graduation,
            name_of_clinic: d.name_of_clinic,
            speciality: d.speciality,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Public view of an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    /// Appointment identifier.
    pub id: i32,
    /// Doctor the appointment belongs to.
    pub doctor_id: i32,
    /// Client name.
    pub client_name: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time.
    pub time: NaiveTime,
    /// Optional comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            doctor_id: a.doctor_id,
            client_name: a.client_name,
            date: a.date,
            time: a.time,
            comment: a.comment,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Build a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
