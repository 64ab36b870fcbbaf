//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use clinic_auth::directory::UserDirectory;
use clinic_auth::gate::AccessGate;
use clinic_auth::jwt::TokenCodec;
use clinic_auth::password::PasswordHasher;
use clinic_core::config::AppConfig;
use clinic_database::repositories::{
    AppointmentRepository, DoctorRepository, RoleRepository, UserRepository,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Only what the
/// handlers read lives here; the user and role repositories and the
/// password hasher are owned by the [`UserDirectory`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// JWT issuance and verification.
    pub token_codec: Arc<TokenCodec>,
    /// Role-based access gate.
    pub access_gate: Arc<AccessGate>,
    /// Account lookup, registration and role reassignment.
    pub user_directory: Arc<UserDirectory>,

    /// Doctor repository.
    pub doctor_repo: Arc<DoctorRepository>,
    /// Appointment repository.
    pub appointment_repo: Arc<AppointmentRepository>,
}

impl AppState {
    /// Wire up the full dependency graph from configuration and a pool.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let role_repo = RoleRepository::new(db_pool.clone());
        let doctor_repo = DoctorRepository::new(db_pool.clone());
        let appointment_repo = AppointmentRepository::new(db_pool);

        let token_codec = TokenCodec::new(&config.auth);
        let access_gate = AccessGate::new(token_codec.clone());
        let user_directory = UserDirectory::new(user_repo, role_repo, PasswordHasher::new());

        Self {
            config,
            token_codec: Arc::new(token_codec),
            access_gate: Arc::new(access_gate),
            user_directory: Arc::new(user_directory),
            doctor_repo: Arc::new(doctor_repo),
            appointment_repo: Arc::new(appointment_repo),
        }
    }
}
