//! Session manager: owns the credential-verification and token-lifecycle
//! flows and the single-active-session invariant.
//!
//! The invariant is enforced purely through last-writer-wins overwrites in
//! the session store. Concurrent logins for the same user race; both get
//! valid token pairs, but only the pair matching the record that landed
//! last will pass later `refresh` calls. This is accepted behavior;
//! do not add locking around it.

use std::time::Duration;

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bazaar_auth::{create_access_token, create_refresh_token, verify_refresh_token};
use bazaar_config::JwtConfig;
use bazaar_core::AppError;
use bazaar_core::password::{hash_password, verify_password};
use bazaar_models::auth::{AuthTokens, LoginRequest, SignupRequest};
use bazaar_models::users::User;
use bazaar_session::{SessionStore, SessionStoreError};

use crate::modules::users::UserService;

/// Upper bound on a single bcrypt hash or verify call.
const HASH_TIMEOUT: Duration = Duration::from_secs(5);

pub struct AuthService;

impl AuthService {
    /// Registers a new identity and opens its first session.
    ///
    /// Field validation (missing fields, password length) happens in the
    /// extractor before this runs. The email pre-check gives the common
    /// duplicate case a fast answer; the unique constraint in
    /// [`UserService::create`] catches the concurrent-signup race.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn sign_up(
        db: &PgPool,
        sessions: &SessionStore,
        jwt_config: &JwtConfig,
        dto: SignupRequest,
    ) -> Result<(User, AuthTokens), AppError> {
        if UserService::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::DuplicateIdentity);
        }

        let password_hash = hash_blocking(dto.password).await?;
        let user = UserService::create(db, &dto.name, &dto.email, &password_hash).await?;

        let tokens = issue_session(sessions, jwt_config, user.id).await?;

        Ok((user, tokens))
    }

    /// Verifies credentials and opens a fresh session.
    ///
    /// Overwrites any existing session record for the user, which
    /// invalidates a previously issued refresh token even before its
    /// natural expiry.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        sessions: &SessionStore,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<(User, AuthTokens), AppError> {
        // Absent identity and wrong password take the same exit so the
        // response cannot be used to probe which emails are registered.
        let Some(record) = UserService::find_by_email(db, &dto.email).await? else {
            return Err(AppError::InvalidCredentials);
        };

        let password_matches =
            verify_blocking(dto.password, record.password_hash.clone()).await?;
        if !password_matches {
            return Err(AppError::InvalidCredentials);
        }

        let tokens = issue_session(sessions, jwt_config, record.id).await?;

        Ok((record.into_user(), tokens))
    }

    /// Mints a new access token for a refresh token that is valid, current,
    /// and matches the stored session record.
    ///
    /// The refresh token itself is not rotated: it stays valid until its
    /// original expiry or an intervening login/logout.
    #[instrument(skip_all)]
    pub async fn refresh(
        sessions: &SessionStore,
        jwt_config: &JwtConfig,
        refresh_token: Option<&str>,
    ) -> Result<String, AppError> {
        let token = refresh_token.ok_or(AppError::TokenMissing)?;

        let claims = verify_refresh_token(token, jwt_config)?;
        let user_id = parse_subject(&claims.sub)?;

        let stored = sessions
            .get(user_id)
            .await
            .map_err(store_unavailable)?;

        // A missing record (logout, TTL expiry) and a different record
        // (newer login overwrote it) both mean this token no longer
        // represents the live session.
        if stored.as_deref() != Some(token) {
            return Err(AppError::SessionMismatch);
        }

        create_access_token(user_id, jwt_config)
    }

    /// Terminates the caller's session.
    ///
    /// Best-effort: a missing or garbled refresh token is not an error,
    /// since the goal of ending the session is trivially met. A store failure
    /// while deleting a verified session is still surfaced, because the
    /// record would otherwise stay usable.
    #[instrument(skip_all)]
    pub async fn logout(
        sessions: &SessionStore,
        jwt_config: &JwtConfig,
        refresh_token: Option<&str>,
    ) -> Result<(), AppError> {
        let Some(token) = refresh_token else {
            return Ok(());
        };

        let Ok(claims) = verify_refresh_token(token, jwt_config) else {
            return Ok(());
        };
        let Ok(user_id) = parse_subject(&claims.sub) else {
            return Ok(());
        };

        sessions.delete(user_id).await.map_err(store_unavailable)
    }

    /// Returns the public projection for an identity already verified by
    /// the access-token extractor.
    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        UserService::find_by_id(db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with id {} not found", user_id)))
    }
}

/// Issues an access/refresh pair and persists the refresh token as the
/// user's (only) session record.
async fn issue_session(
    sessions: &SessionStore,
    jwt_config: &JwtConfig,
    user_id: Uuid,
) -> Result<AuthTokens, AppError> {
    let access_token = create_access_token(user_id, jwt_config)?;
    let refresh_token = create_refresh_token(user_id, jwt_config)?;

    sessions
        .put(
            user_id,
            &refresh_token,
            Duration::from_secs(jwt_config.refresh_token_expiry as u64),
        )
        .await
        .map_err(store_unavailable)?;

    Ok(AuthTokens {
        access_token,
        refresh_token,
    })
}

fn store_unavailable(err: SessionStoreError) -> AppError {
    AppError::store_unavailable(err)
}

fn parse_subject(sub: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(sub).map_err(|_| AppError::TokenInvalid)
}

/// Runs bcrypt hashing on the blocking pool under [`HASH_TIMEOUT`].
async fn hash_blocking(password: String) -> Result<String, AppError> {
    run_blocking(move || hash_password(&password)).await
}

/// Runs bcrypt verification on the blocking pool under [`HASH_TIMEOUT`].
async fn verify_blocking(password: String, hash: String) -> Result<bool, AppError> {
    run_blocking(move || verify_password(&password, &hash)).await
}

async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(work);

    match tokio::time::timeout(HASH_TIMEOUT, handle).await {
        Err(_) => Err(AppError::HashTimeout),
        Ok(joined) => joined.map_err(AppError::internal)?,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_blocking_roundtrip() {
        let hash = hash_blocking("secret1".to_string()).await.unwrap();

        assert!(verify_blocking("secret1".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_blocking("secret2".to_string(), hash).await.unwrap());
    }

    #[test]
    fn test_parse_subject_rejects_non_uuid() {
        assert!(matches!(
            parse_subject("not-a-uuid"),
            Err(AppError::TokenInvalid)
        ));
    }
}
