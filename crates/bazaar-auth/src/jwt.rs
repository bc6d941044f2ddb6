//! Token creation and verification.
//!
//! Each token class is signed with its own secret from [`JwtConfig`], so a
//! refresh token presented where an access token is expected (or the
//! reverse) fails signature verification and surfaces as
//! [`AppError::TokenInvalid`].
//!
//! Expiry comparison is inclusive-exclusive on whole seconds: a token is
//! rejected as [`AppError::TokenExpired`] from the instant `now >= exp`.
//! Validation runs with zero leeway, so the boundary is exact.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use bazaar_config::JwtConfig;
use bazaar_core::AppError;

use crate::claims::{AccessClaims, RefreshClaims};

/// Creates an access token for the given user.
///
/// # Errors
///
/// Returns an error only if token encoding itself fails.
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = AccessClaims {
        sub: user_id.to_string(),
        exp: now + jwt_config.access_token_expiry as usize,
        iat: now,
    };

    sign(&claims, &jwt_config.access_secret)
}

/// Creates a refresh token for the given user.
///
/// The caller is responsible for persisting the returned token as the
/// user's session record; an unpersisted refresh token will fail every
/// subsequent refresh attempt with a session mismatch.
pub fn create_refresh_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = RefreshClaims {
        sub: user_id.to_string(),
        exp: now + jwt_config.refresh_token_expiry as usize,
        iat: now,
    };

    sign(&claims, &jwt_config.refresh_secret)
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// - [`AppError::TokenExpired`] when the token verified but `now >= exp`
/// - [`AppError::TokenInvalid`] on signature mismatch, structural
///   corruption, or a token signed for the refresh class
pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<AccessClaims, AppError> {
    open(token, &jwt_config.access_secret)
}

/// Verifies a refresh token and returns its claims.
///
/// Errors as [`verify_access_token`], with the classes swapped.
pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshClaims, AppError> {
    open(token, &jwt_config.refresh_secret)
}

fn sign<C: Serialize>(claims: &C, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

fn open<C: DeserializeOwned>(token: &str, secret: &str) -> Result<C, AppError> {
    let mut validation = Validation::default();
    // The default 60s leeway would keep tokens alive past their expiry.
    validation.leeway = 0;

    decode::<C>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::TokenInvalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            access_secret: "access-secret-at-least-32-characters-long".to_string(),
            refresh_secret: "refresh-secret-at-least-32-characters-ok".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, &config).unwrap();
        let claims = verify_access_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, config.access_token_expiry as usize);
    }

    #[test]
    fn test_refresh_token_roundtrip() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_refresh_token(user_id, &config).unwrap();
        let claims = verify_refresh_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(
            claims.exp - claims.iat,
            config.refresh_token_expiry as usize
        );
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let access = create_access_token(user_id, &config).unwrap();
        let refresh = create_refresh_token(user_id, &config).unwrap();

        let access_claims = verify_access_token(&access, &config).unwrap();
        let refresh_claims = verify_refresh_token(&refresh, &config).unwrap();

        assert!(refresh_claims.exp > access_claims.exp);
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), &config).unwrap();

        let err = verify_refresh_token(&token, &config).unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let config = get_test_jwt_config();
        let token = create_refresh_token(Uuid::new_v4(), &config).unwrap();

        let err = verify_access_token(&token, &config).unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;

        let claims = AccessClaims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 30,
            iat: now - 930,
        };
        let token = sign(&claims, &config.access_secret).unwrap();

        let err = verify_access_token(&token, &config).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret_is_invalid_not_expired() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), &config).unwrap();

        let other = JwtConfig {
            access_secret: "a-completely-different-access-secret!!".to_string(),
            ..config
        };

        let err = verify_access_token(&token, &other).unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let config = get_test_jwt_config();

        for token in ["", "not-a-jwt", "a.b", "a.b.c.d", "!!!.###.$$$"] {
            let err = verify_access_token(token, &config).unwrap_err();
            assert!(matches!(err, AppError::TokenInvalid), "token: {token:?}");
        }
    }
}
