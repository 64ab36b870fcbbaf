//! Role-gated demonstration endpoints.

use axum::Json;
use axum::extract::State;

use clinic_auth::gate::{ADMIN_ONLY, USER_OR_ADMIN};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/protected/user_demo — any authenticated USER or ADMIN.
pub async fn user_demo(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    state.access_gate.require_role(&auth, USER_OR_ADMIN)?;
    Ok(Json(MessageResponse::new(format!(
        "Hello {}, you have user-level access",
        auth.email
    ))))
}

/// GET /api/protected/admin_demo — ADMIN only.
pub async fn admin_demo(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    state.access_gate.require_role(&auth, ADMIN_ONLY)?;
    Ok(Json(MessageResponse::new(format!(
        "Hello {}, you have admin-level access",
        auth.email
    ))))
}
