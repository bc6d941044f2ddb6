use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use bazaar_auth::{AccessClaims, verify_access_token};
use bazaar_core::AppError;

use crate::modules::auth::cookies::ACCESS_TOKEN_COOKIE;
use crate::state::AppState;

/// Extractor that validates the access token and exposes its claims.
///
/// Looks for the token in the `accessToken` cookie first, then in the
/// `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AccessClaims);

impl AuthUser {
    /// Get the verified user ID as a UUID.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub).map_err(|_| AppError::TokenInvalid)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let bearer = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .or_else(|| bearer.map(|t| t.to_string()))
            .ok_or(AppError::TokenMissing)?;

        let claims = verify_access_token(&token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parses_uuid_subject() {
        let id = Uuid::new_v4();
        let user = AuthUser(AccessClaims {
            sub: id.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        });

        assert_eq!(user.user_id().unwrap(), id);
    }

    #[test]
    fn test_user_id_rejects_garbage_subject() {
        let user = AuthUser(AccessClaims {
            sub: "not-a-uuid".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        });

        assert!(matches!(user.user_id(), Err(AppError::TokenInvalid)));
    }
}
