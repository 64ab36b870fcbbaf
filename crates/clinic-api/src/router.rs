//! Route definitions for the clinic HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(demo_routes())
        .merge(doctor_routes())
        .merge(appointment_routes());

    let cors = middleware::cors::cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, healthcheck, role reassignment.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/healthcheck", get(handlers::health::healthcheck))
        .route("/auth/user/addrole", post(handlers::auth::add_role))
}

/// Role-gated demonstration endpoints.
fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/protected/user_demo", get(handlers::demo::user_demo))
        .route("/protected/admin_demo", get(handlers::demo::admin_demo))
}

/// Doctor CRUD and queries, plus per-doctor appointments.
fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(handlers::doctor::list_doctors))
        .route("/doctors", post(handlers::doctor::create_doctor))
        .route("/doctors/{id}", get(handlers::doctor::get_doctor))
        .route("/doctors/{id}", put(handlers::doctor::update_doctor))
        .route("/doctors/{id}", delete(handlers::doctor::delete_doctor))
        .route(
            "/doctors/speciality/{speciality}",
            get(handlers::doctor::list_by_speciality),
        )
        .route(
            "/doctors/birthdate/range",
            get(handlers::doctor::list_by_birthdate_range),
        )
        .route(
            "/doctors/birthdate/{date}",
            get(handlers::doctor::list_by_birthdate),
        )
        .route(
            "/doctors/{id}/appointments",
            get(handlers::appointment::list_for_doctor),
        )
        .route(
            "/doctors/{id}/appointments",
            post(handlers::appointment::create_for_doctor),
        )
}

/// Flat appointment lookups and changes.
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(handlers::appointment::list_appointments))
        .route(
            "/appointments/{id}",
            get(handlers::appointment::get_appointment),
        )
        .route(
            "/appointments/{id}",
            put(handlers::appointment::update_appointment),
        )
        .route(
            "/appointments/{id}",
            delete(handlers::appointment::delete_appointment),
        )
}
