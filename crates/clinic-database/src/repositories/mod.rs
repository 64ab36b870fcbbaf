//! Repository implementations for all clinic entities.

pub mod appointment;
pub mod doctor;
pub mod role;
pub mod user;

pub use appointment::AppointmentRepository;
pub use doctor::DoctorRepository;
pub use role::RoleRepository;
pub use user::UserRepository;
