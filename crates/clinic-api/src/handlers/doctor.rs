//! Doctor handlers — CRUD plus speciality and birthdate queries.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use clinic_auth::gate::{ADMIN_ONLY, USER_OR_ADMIN};
use clinic_core::error::AppError;
use clinic_entity::doctor::Speciality;
use clinic_entity::doctor::model::DoctorData;

use crate::dto::request::{BirthdateRangeQuery, DoctorRequest};
use crate::dto::response::DoctorResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/doctors
pub async fn list_doctors(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<DoctorResponse>>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;

    let doctors = state.doctor_repo.find_all().await?;
    Ok(Json(doctors.into_iter().map(Into::into).collect()))
}

/// GET /api/doctors/{id}
pub async fn get_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<DoctorResponse>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    validate_positive_id(id)?;

    let doctor = state
        .doctor_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| doctor_not_found(id))?;
    Ok(Json(doctor.into()))
}

/// GET /api/doctors/speciality/{speciality}
pub async fn list_by_speciality(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(speciality): Path<String>,
) -> Result<Json<Vec<DoctorResponse>>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    let speciality = speciality.parse::<Speciality>()?;

    let doctors = state.doctor_repo.find_by_speciality(speciality).await?;
    Ok(Json(doctors.into_iter().map(Into::into).collect()))
}

/// GET /api/doctors/birthdate/{date}
pub async fn list_by_birthdate(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(date): Path<chrono::NaiveDate>,
) -> Result<Json<Vec<DoctorResponse>>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;

    let doctors = state.doctor_repo.find_by_birthdate(date).await?;
    Ok(Json(doctors.into_iter().map(Into::into).collect()))
}

/// GET /api/doctors/birthdate/range?from=&to=
pub async fn list_by_birthdate_range(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(range): Query<BirthdateRangeQuery>,
) -> Result<Json<Vec<DoctorResponse>>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    if range.from > range.to {
        return Err(AppError::validation("'from' must not be after 'to'").into());
    }

    let doctors = state
        .doctor_repo
        .find_by_birthdate_range(range.from, range.to)
        .await?;
    Ok(Json(doctors.into_iter().map(Into::into).collect()))
}

/// POST /api/doctors
pub async fn create_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<DoctorRequest>,
) -> Result<(StatusCode, Json<DoctorResponse>), ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    validate_request(&req)?;

    let doctor = state.doctor_repo.create(&to_doctor_data(req)).await?;
    Ok((StatusCode::CREATED, Json(doctor.into())))
}

/// PUT /api/doctors/{id}
pub async fn update_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<DoctorRequest>,
) -> Result<Json<DoctorResponse>, ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    validate_positive_id(id)?;
    validate_request(&req)?;

    let doctor = state
        .doctor_repo
        .update(id, &to_doctor_data(req))
        .await?
        .ok_or_else(|| doctor_not_found(id))?;
    Ok(Json(doctor.into()))
}

/// DELETE /api/doctors/{id}
pub async fn delete_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    validate_positive_id(id)?;

    if !state.doctor_repo.delete(id).await? {
        return Err(doctor_not_found(id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

fn to_doctor_data(req: DoctorRequest) -> DoctorData {
    DoctorData {
        name: req.name,
        date_of_birth: req.date_of_birth,
        year_of_graduation: req.year_of_graduation,
        name_of_clinic: req.name_of_clinic,
        speciality: req.speciality,
    }
}

pub(crate) fn validate_positive_id(id: i32) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::validation("ID must be a positive number"));
    }
    Ok(())
}

pub(crate) fn doctor_not_found(id: i32) -> AppError {
    AppError::not_found(format!("Doctor not found with id: {id}"))
}
