//! # Bazaar Models
//!
//! Domain models and DTOs for the Bazaar API.
//!
//! - [`users`]: the user entity, its public projection and roles
//! - [`auth`]: request/response DTOs for the authentication flows
//!
//! # Example
//!
//! ```ignore
//! use bazaar_models::users::{User, UserRole};
//! use bazaar_models::auth::{LoginRequest, SignupRequest};
//! ```

pub mod auth;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthTokens, LoginRequest, MessageResponse, SignupRequest, SignupResponse};
pub use users::{User, UserRecord, UserRole};
