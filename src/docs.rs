use utoipa::OpenApi;

use crate::modules::auth::controller;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bazaar API",
        description = "Authentication and session management for the Bazaar storefront",
    ),
    paths(
        controller::sign_up,
        controller::login,
        controller::logout,
        controller::refresh_token,
        controller::get_profile,
    ),
    components(schemas(
        bazaar_models::users::User,
        bazaar_models::users::UserRole,
        bazaar_models::auth::SignupRequest,
        bazaar_models::auth::LoginRequest,
        bazaar_models::auth::SignupResponse,
        bazaar_models::auth::MessageResponse,
        controller::ErrorResponse,
    )),
    tags(
        (name = "Authentication", description = "Sign-up, login, logout, token refresh, and profile")
    )
)]
pub struct ApiDoc;
