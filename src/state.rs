use sqlx::PgPool;

use bazaar_config::{CookieConfig, CorsConfig, JwtConfig};
use bazaar_db::init_db_pool;
use bazaar_session::{SessionStore, SessionStoreConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub sessions: SessionStore,
    pub jwt_config: JwtConfig,
    pub cookie_config: CookieConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let session_config = SessionStoreConfig::from_env();
    let sessions = SessionStore::connect(&session_config.url, session_config.op_timeout())
        .await
        .expect("Failed to connect to session store");

    AppState {
        db: init_db_pool().await,
        sessions,
        jwt_config: JwtConfig::from_env(),
        cookie_config: CookieConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
