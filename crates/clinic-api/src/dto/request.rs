//! Request DTOs with validation rules.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use clinic_entity::doctor::Speciality;

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name of the new account.
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub name: String,
    /// Login email, unique across accounts.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    /// Requested role name. Absent or null is rejected with 400.
    pub role: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Body of `POST /api/auth/user/addrole`.
///
/// The target account is the authenticated principal; only the new
/// role is carried in the body.
#[derive(Debug, Clone, Deserialize)]
pub struct AddRoleRequest {
    /// The role name to assign. Absent or null is rejected with 400.
    #[serde(rename = "newRole", alias = "new_role")]
    pub new_role: Option<String>,
}

/// Body of `POST /api/doctors` and `PUT /api/doctors/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRequest {
    /// Full name of the doctor.
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Year the doctor graduated.
    #[validate(range(min = 1900, max = 2100, message = "must be a plausible year"))]
    pub year_of_graduation: i32,
    /// Clinic the doctor practices at.
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name_of_clinic: String,
    /// Medical speciality.
    pub speciality: Speciality,
}

/// Body of `POST /api/doctors/{id}/appointments` and
/// `PUT /api/appointments/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// Name of the client booking the appointment.
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub client_name: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time.
    pub time: NaiveTime,
    /// Optional free-text comment.
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub comment: Option<String>,
}

/// Query parameters of `GET /api/doctors/birthdate/range`.
#[derive(Debug, Clone, Deserialize)]
pub struct BirthdateRangeQuery {
    /// Inclusive lower bound.
    pub from: NaiveDate,
    /// Inclusive upper bound.
    pub to: NaiveDate,
}
