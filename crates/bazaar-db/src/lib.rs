//! # Bazaar DB
//!
//! Database pool initialization for the Bazaar API.
//!
//! # Example
//!
//! ```ignore
//! use bazaar_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//! }
//! ```

use std::env;

/// Initializes the PostgreSQL connection pool from `DATABASE_URL`.
///
/// Called once during startup; the returned pool is cheaply cloneable and
/// lives in the application state.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
