//! # clinic-entity
//!
//! Domain entity models and closed enums for the clinic API.

pub mod appointment;
pub mod doctor;
pub mod user;

pub use appointment::Appointment;
pub use doctor::{Doctor, Speciality};
pub use user::{RoleType, User};
