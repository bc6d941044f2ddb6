use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;
use utoipa::ToSchema;

use bazaar_core::AppError;
use bazaar_models::auth::{LoginRequest, MessageResponse, SignupRequest, SignupResponse};
use bazaar_models::users::User;

use super::cookies::{self, REFRESH_TOKEN_COOKIE};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn refresh_token_from(jar: &CookieJar) -> Option<String> {
    jar.get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Register a new user and open their first session
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = SignupResponse),
        (status = 400, description = "Validation error or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<SignupResponse>), AppError> {
    let (user, tokens) =
        AuthService::sign_up(&state.db, &state.sessions, &state.jwt_config, dto).await?;

    let jar = cookies::set_auth_cookies(jar, &tokens, &state.cookie_config, &state.jwt_config);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(SignupResponse {
            user,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, token cookies set", body = User),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<User>), AppError> {
    let (user, tokens) =
        AuthService::login(&state.db, &state.sessions, &state.jwt_config, dto).await?;

    let jar = cookies::set_auth_cookies(jar, &tokens, &state.cookie_config, &state.jwt_config);

    Ok((jar, Json(user)))
}

/// Logout and revoke the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out, token cookies cleared", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let refresh_token = refresh_token_from(&jar);

    AuthService::logout(&state.sessions, &state.jwt_config, refresh_token.as_deref()).await?;

    let jar = cookies::clear_auth_cookies(jar);

    Ok((
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Mint a new access token from the refresh token cookie
#[utoipa::path(
    post,
    path = "/api/auth/refresh-token",
    responses(
        (status = 200, description = "Access token refreshed, cookie set", body = MessageResponse),
        (status = 401, description = "Missing, invalid, expired, or superseded refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let refresh_token = refresh_token_from(&jar);

    let access_token =
        AuthService::refresh(&state.sessions, &state.jwt_config, refresh_token.as_deref())
            .await?;

    let jar = jar.add(cookies::access_cookie(
        access_token,
        &state.cookie_config,
        &state.jwt_config,
    ));

    Ok((
        jar,
        Json(MessageResponse {
            message: "Token refreshed successfully".to_string(),
        }),
    ))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Authenticated user's profile", body = User),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::get_profile(&state.db, user.user_id()?).await?;

    Ok(Json(user))
}
