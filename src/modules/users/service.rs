//! Credential store adapter.
//!
//! The only component that touches the `users` table. Emails are unique
//! case-insensitively: this adapter normalizes (trim + lowercase) before
//! every lookup and insert, and the table's unique constraint backs the
//! invariant against concurrent sign-ups.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bazaar_core::AppError;
use bazaar_models::users::{User, UserRecord};

pub struct UserService;

impl UserService {
    /// Looks up the full credential row for an email, or `None` when no
    /// identity is registered under it.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<UserRecord>, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, email, role, password, created_at, updated_at
               FROM users
               WHERE email = $1"#,
        )
        .bind(normalize_email(email))
        .fetch_optional(db)
        .await
        .map_err(AppError::internal)?;

        Ok(record)
    }

    /// Looks up the public projection of a user by id.
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, role, created_at, updated_at
               FROM users
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::internal)?;

        Ok(user)
    }

    /// Creates a user identity with an already-hashed password and the
    /// default role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateIdentity`] when the email is already
    /// registered (unique-constraint violation).
    #[instrument(skip_all, fields(email = %email))]
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, password)
               VALUES ($1, $2, $3)
               RETURNING id, name, email, role, created_at, updated_at"#,
        )
        .bind(name)
        .bind(normalize_email(email))
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::DuplicateIdentity;
            }
            AppError::internal(e)
        })?;

        Ok(user)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
