//! Doctor entity and speciality enumeration.

pub mod model;
pub mod speciality;

pub use model::{Doctor, DoctorData};
pub use speciality::Speciality;
