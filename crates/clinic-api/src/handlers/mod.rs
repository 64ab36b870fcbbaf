//! HTTP request handlers, grouped by domain.

pub mod appointment;
pub mod auth;
pub mod demo;
pub mod doctor;
pub mod health;
