//! # clinic-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all clinic API entities.

pub mod connection;
pub mod repositories;

pub use connection::{connect_pool, run_migrations};
