//! JWT signing configuration.
//!
//! Access and refresh tokens are signed with distinct secrets so that a
//! token of one class can never be replayed as the other. Both secrets are
//! mandatory: startup fails fast if either is missing from the environment.

use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Secret for the short-lived access token class.
    pub access_secret: String,
    /// Secret for the long-lived refresh token class.
    pub refresh_secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds. Also used as the session record
    /// TTL in the store.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ACCESS_TOKEN_SECRET`: required
    /// - `REFRESH_TOKEN_SECRET`: required
    /// - `JWT_ACCESS_EXPIRY`: seconds, default `900` (15 minutes)
    /// - `JWT_REFRESH_EXPIRY`: seconds, default `604800` (7 days)
    ///
    /// # Panics
    ///
    /// Panics if either signing secret is unset.
    pub fn from_env() -> Self {
        Self {
            access_secret: env::var("ACCESS_TOKEN_SECRET")
                .expect("ACCESS_TOKEN_SECRET must be set"),
            refresh_secret: env::var("REFRESH_TOKEN_SECRET")
                .expect("REFRESH_TOKEN_SECRET must be set"),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900),
            refresh_token_expiry: env::var("JWT_REFRESH_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604_800),
        }
    }
}
