//! Token cookie transport binding.
//!
//! Both tokens travel in HttpOnly, SameSite=Strict cookies so scripts can
//! never read them and cross-site requests never send them. `Secure` is
//! added in production. Max-Age mirrors each token's lifetime, so a cookie
//! never outlives the token inside it. Cookie names match the original
//! storefront clients.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use bazaar_config::{CookieConfig, JwtConfig};
use bazaar_models::auth::AuthTokens;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn token_cookie(
    name: &'static str,
    value: String,
    max_age_seconds: i64,
    config: &CookieConfig,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(max_age_seconds))
        .path("/")
        .build()
}

/// Builds the access token cookie with the token's own lifetime.
pub fn access_cookie(
    token: String,
    cookie_config: &CookieConfig,
    jwt_config: &JwtConfig,
) -> Cookie<'static> {
    token_cookie(
        ACCESS_TOKEN_COOKIE,
        token,
        jwt_config.access_token_expiry,
        cookie_config,
    )
}

/// Builds the refresh token cookie with the token's own lifetime.
pub fn refresh_cookie(
    token: String,
    cookie_config: &CookieConfig,
    jwt_config: &JwtConfig,
) -> Cookie<'static> {
    token_cookie(
        REFRESH_TOKEN_COOKIE,
        token,
        jwt_config.refresh_token_expiry,
        cookie_config,
    )
}

/// Adds both token cookies to the jar.
pub fn set_auth_cookies(
    jar: CookieJar,
    tokens: &AuthTokens,
    cookie_config: &CookieConfig,
    jwt_config: &JwtConfig,
) -> CookieJar {
    jar.add(access_cookie(
        tokens.access_token.clone(),
        cookie_config,
        jwt_config,
    ))
    .add(refresh_cookie(
        tokens.refresh_token.clone(),
        cookie_config,
        jwt_config,
    ))
}

/// Removes both token cookies. The removal cookies must carry the same
/// path as the originals or browsers keep the old ones.
pub fn clear_auth_cookies(jar: CookieJar) -> CookieJar {
    let access = Cookie::build(ACCESS_TOKEN_COOKIE).path("/").build();
    let refresh = Cookie::build(REFRESH_TOKEN_COOKIE).path("/").build();

    jar.remove(access).remove(refresh)
}
