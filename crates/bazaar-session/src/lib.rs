//! # Bazaar Session
//!
//! Redis-backed session records for the Bazaar API.
//!
//! A session record binds a user identifier to their current refresh token
//! under the key `refresh_token:<userId>`, with a TTL matching the token's
//! lifetime. There is at most one record per user: every write overwrites
//! the previous record, which is how the single-session invariant is
//! enforced.
//!
//! This crate provides:
//! - Redis connection management with bounded per-operation timeouts
//! - Session record operations (put, get, delete)
//! - Store configuration from environment variables
//! - The stable key format used by the records
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use bazaar_session::{SessionStore, SessionStoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SessionStoreConfig::from_env();
//!     let store = SessionStore::connect(&config.url, config.op_timeout())
//!         .await
//!         .unwrap();
//!
//!     store.put(user_id, &refresh_token, Duration::from_secs(604_800)).await.unwrap();
//!     let current = store.get(user_id).await.unwrap();
//! }
//! ```

pub mod config;
pub mod keys;
pub mod redis;

pub use config::SessionStoreConfig;
pub use redis::{SessionStore, SessionStoreError};
