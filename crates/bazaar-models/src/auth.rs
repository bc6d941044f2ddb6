//! Authentication request/response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::User;

/// Shortest password accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Sign-up request.
///
/// Field-level validation runs before the service sees the request; the
/// password minimum here must stay in sync with [`MIN_PASSWORD_LENGTH`].
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Login request with email and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Freshly issued access/refresh token pair.
///
/// Handed from the session manager to the transport layer, which binds the
/// tokens to cookies. Never serialized into a response body.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Successful sign-up response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupResponse {
    pub user: User,
    pub message: String,
}

/// Generic message-only response (logout, token refresh).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_rejects_short_password() {
        let dto = SignupRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "12345".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_signup_accepts_minimum_length_password() {
        let dto = SignupRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "1".repeat(MIN_PASSWORD_LENGTH),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_signup_rejects_missing_fields() {
        let dto = SignupRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "".to_string(),
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_login_requires_password() {
        let dto = LoginRequest {
            email: "a@x.com".to_string(),
            password: "".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
