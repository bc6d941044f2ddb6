//! Session store configuration.

use std::env;
use std::time::Duration;

/// Redis connection settings loaded from environment variables.
///
/// # Environment Variables
///
/// - `REDIS_URL`: connection URL (default: `redis://127.0.0.1:6379`)
/// - `SESSION_STORE_TIMEOUT_SECONDS`: per-operation timeout (default: `5`)
#[derive(Clone, Debug)]
pub struct SessionStoreConfig {
    /// Redis connection URL.
    pub url: String,

    /// Upper bound on any single store operation, in seconds.
    pub op_timeout_seconds: u64,
}

impl SessionStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            op_timeout_seconds: env::var("SESSION_STORE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// The per-operation timeout as a [`Duration`].
    pub fn op_timeout(&self) -> Duration {
        Duration::from_secs(self.op_timeout_seconds)
    }
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".into(),
            op_timeout_seconds: 5,
        }
    }
}
