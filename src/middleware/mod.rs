//! Middleware and extractors for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request carrying the `accessToken` cookie (or an
//!    `Authorization: Bearer <token>` header)
//! 2. [`auth::AuthUser`] verifies the token against the access secret and
//!    extracts the claims
//! 3. The handler resolves the verified user id however it needs to
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_profile(user: AuthUser) -> impl IntoResponse {
//!     let user_id = user.user_id()?;
//!     // ...
//! }
//! ```

pub mod auth;
