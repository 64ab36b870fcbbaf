//! # clinic-api
//!
//! Axum HTTP layer for the clinic API: application state, router,
//! request DTOs, handlers, the auth extractor and the `AppError → HTTP`
//! mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
