use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_profile, login, logout, refresh_token, sign_up};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/refresh-token", post(refresh_token))
        .route("/profile", get(get_profile))
}
