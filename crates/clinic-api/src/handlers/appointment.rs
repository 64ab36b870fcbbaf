//! Appointment handlers — nested under doctors for listing and booking,
//! flat for lookups and changes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use clinic_auth::gate::{ADMIN_ONLY, USER_OR_ADMIN};
use clinic_core::error::AppError;
use clinic_entity::appointment::model::AppointmentData;

use crate::dto::request::AppointmentRequest;
use crate::dto::response::AppointmentResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::doctor::{doctor_not_found, validate_positive_id};
use crate::state::AppState;

/// GET /api/doctors/{id}/appointments
pub async fn list_for_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Vec<AppointmentResponse>>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    validate_positive_id(doctor_id)?;

    if state.doctor_repo.find_by_id(doctor_id).await?.is_none() {
        return Err(doctor_not_found(doctor_id).into());
    }

    let appointments = state.appointment_repo.find_by_doctor(doctor_id).await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

/// POST /api/doctors/{id}/appointments
pub async fn create_for_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(doctor_id): Path<i32>,
    Json(req): Json<AppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    validate_positive_id(doctor_id)?;
    validate_request(&req)?;

    if state.doctor_repo.find_by_id(doctor_id).await?.is_none() {
        return Err(doctor_not_found(doctor_id).into());
    }

    let appointment = state
        .appointment_repo
        .create(doctor_id, &to_appointment_data(req))
        .await?;
    Ok((StatusCode::CREATED, Json(appointment.into())))
}

/// GET /api/appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AppointmentResponse>>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;

    let appointments = state.appointment_repo.find_all().await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

/// GET /api/appointments/{id}
pub async fn get_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    validate_positive_id(id)?;

    let appointment = state
        .appointment_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| appointment_not_found(id))?;
    Ok(Json(appointment.into()))
}

/// PUT /api/appointments/{id}
pub async fn update_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<AppointmentRequest>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    validate_positive_id(id)?;
    validate_request(&req)?;

    let appointment = state
        .appointment_repo
        .update(id, &to_appointment_data(req))
        .await?
        .ok_or_else(|| appointment_not_found(id))?;
    Ok(Json(appointment.into()))
}

/// DELETE /api/appointments/{id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    validate_positive_id(id)?;

    if !state.appointment_repo.delete(id).await? {
        return Err(appointment_not_found(id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

fn to_appointment_data(req: AppointmentRequest) -> AppointmentData {
    AppointmentData {
        client_name: req.client_name,
        date: req.date,
        time: req.time,
        comment: req.comment,
    }
}

fn appointment_not_found(id: i32) -> AppError {
    AppError::not_found(format!("Appointment not found with id: {id}"))
}
