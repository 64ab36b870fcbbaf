//! Auth handlers — register, login, role reassignment.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use clinic_auth::gate::USER_OR_ADMIN;
use clinic_core::error::AppError;
use clinic_entity::user::RoleType;

use crate::dto::request::{AddRoleRequest, LoginRequest, RegisterRequest};
use crate::dto::response::{PrincipalResponse, TokenResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
///
/// Creates an account and immediately issues a token for it.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    validate_request(&req)?;
    let role = parse_required_role(req.role.as_deref())?;

    let user = state
        .user_directory
        .create_user(&req.name, &req.email, &req.password, role)
        .await?;

    let token = state.token_codec.issue(&user.email, user.role)?;
    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token,
            email: user.email,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate_request(&req)?;

    let user = state
        .user_directory
        .find_verified_user(&req.email, &req.password)
        .await?;

    let token = state.token_codec.issue(&user.email, user.role)?;
    Ok(Json(TokenResponse {
        token,
        email: user.email,
    }))
}

/// POST /api/auth/user/addrole
///
/// Reassigns the caller's own role; the target account comes from the
/// bearer token, not the body. Any authenticated USER or ADMIN may call
/// this; role sets are exact, so both roles are listed.
pub async fn add_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddRoleRequest>,
) -> Result<Json<PrincipalResponse>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    let new_role = parse_required_role(req.new_role.as_deref())?;

    let user = state
        .user_directory
        .reassign_role(&auth.email, new_role)
        .await?;
    Ok(Json(PrincipalResponse {
        email: user.email,
        role: user.role,
    }))
}

/// A role field must be present and name a known role.
fn parse_required_role(role: Option<&str>) -> Result<RoleType, AppError> {
    let role = role.ok_or_else(|| AppError::validation("Role must be provided"))?;
    role.parse::<RoleType>()
}
