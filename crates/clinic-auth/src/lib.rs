//! # clinic-auth
//!
//! Authentication and authorization building blocks for the clinic API:
//! Argon2id password hashing, JWT issuance and verification, user
//! credential checks, and the role-based access gate.

pub mod directory;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod principal;

pub use directory::UserDirectory;
pub use gate::AccessGate;
pub use jwt::TokenCodec;
pub use password::PasswordHasher;
pub use principal::Principal;
