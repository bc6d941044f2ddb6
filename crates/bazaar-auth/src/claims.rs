//! JWT claim structures for the two token classes.
//!
//! Both classes carry the same minimal claim set: the user identifier as
//! `sub` plus whole-second Unix `iat`/`exp` timestamps. Everything else
//! about the user (name, email, role) is resolved from the database when
//! needed, so tokens never go stale on profile changes.

use serde::{Deserialize, Serialize};

/// Claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// Token expiration timestamp (Unix seconds)
    pub exp: usize,
    /// Token issued-at timestamp (Unix seconds)
    pub iat: usize,
}

/// Claims embedded in refresh tokens.
///
/// A refresh token is only honored while it equals the session record
/// stored for its subject; the claims alone are not enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// Token expiration timestamp (Unix seconds)
    pub exp: usize,
    /// Token issued-at timestamp (Unix seconds)
    pub iat: usize,
}
