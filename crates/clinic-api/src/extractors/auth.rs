//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header and authenticates it through the access gate.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use clinic_auth::principal::Principal;
use clinic_entity::user::RoleType;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated principal available in handlers.
///
/// Extraction performs the authentication half of the gate (presence,
/// signature, expiry → 401). Role checks stay in the handler, where the
/// route's allowed set is declared.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        // ANYONE here means "any authenticated principal": the extractor
        // only answers the 401 question.
        let principal = state.access_gate.authorize(token, &[RoleType::Anyone])?;
        Ok(AuthUser(principal))
    }
}
