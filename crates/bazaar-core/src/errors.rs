//! Application error taxonomy.
//!
//! Every error that can reach a handler is one of these variants; raw
//! sqlx/bcrypt/jsonwebtoken/redis errors are translated by the services
//! before they cross that boundary. Recovered, user-facing variants keep
//! their specific message in the response body. Infrastructure variants
//! (`StoreUnavailable`, `HashTimeout`, `Internal`) respond with an opaque
//! `"Server error"` body; the detail only goes to the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: missing fields, bad email shape, short password.
    #[error("{0}")]
    Validation(String),

    /// An identity with this email is already registered.
    #[error("User already exists")]
    DuplicateIdentity,

    /// Unknown email or wrong password. Deliberately a single variant with
    /// a single message so callers cannot tell which field was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No token was presented where one is required.
    #[error("No authentication token provided")]
    TokenMissing,

    /// Signature mismatch, structural corruption, or wrong token class.
    #[error("Invalid token")]
    TokenInvalid,

    /// The token verified but its expiry has passed.
    #[error("Token expired")]
    TokenExpired,

    /// The presented refresh token does not match the stored session
    /// record (overwritten by a newer login, or deleted by logout).
    #[error("Invalid refresh token")]
    SessionMismatch,

    /// The session store could not be reached or timed out.
    #[error("Session store unavailable")]
    StoreUnavailable(anyhow::Error),

    /// Password hashing or verification exceeded its time budget.
    #[error("Password hashing timed out")]
    HashTimeout,

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn store_unavailable<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::StoreUnavailable(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateIdentity => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::TokenMissing
            | Self::TokenInvalid
            | Self::TokenExpired
            | Self::SessionMismatch => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) | Self::HashTimeout | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(error = ?self, "request failed with server error");
            "Server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
