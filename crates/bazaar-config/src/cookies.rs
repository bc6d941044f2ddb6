//! Transport cookie configuration.

use std::env;

/// Attributes applied to the token cookies set by the auth handlers.
///
/// The `Secure` flag follows the deployment environment: browsers would
/// refuse secure cookies over plain-HTTP local development, so it is only
/// enabled in production.
#[derive(Clone, Debug)]
pub struct CookieConfig {
    /// Set the `Secure` attribute on token cookies.
    pub secure: bool,
}

impl CookieConfig {
    /// Load configuration from environment variables.
    ///
    /// `ENVIRONMENT=production` enables the `Secure` attribute; any other
    /// value (or no value) leaves it off.
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self {
            secure: environment == "production",
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self { secure: false }
    }
}
