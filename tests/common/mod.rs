use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use bazaar::router::init_router;
use bazaar::state::AppState;
use bazaar_config::{CookieConfig, CorsConfig, JwtConfig};
use bazaar_session::SessionStore;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// Builds the full application against live Postgres and Redis instances.
///
/// Reads `DATABASE_URL` and `REDIS_URL` from the environment (`.env` is
/// honored); token secrets and cookie flags are fixed test values so the
/// suite never depends on production configuration.
pub async fn setup_test_app() -> Router {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

    let db = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run migrations");

    let sessions = SessionStore::connect(&redis_url, Duration::from_secs(5))
        .await
        .expect("Failed to connect to session store");

    let state = AppState {
        db,
        sessions,
        jwt_config: test_jwt_config(),
        cookie_config: CookieConfig { secure: false },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };

    init_router(state)
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "integration-test-access-secret-value".to_string(),
        refresh_secret: "integration-test-refresh-secret-value".to_string(),
        access_token_expiry: 900,
        refresh_token_expiry: 604_800,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Builds a JSON POST request, optionally carrying a `Cookie` header.
pub fn json_request(uri: &str, body: &serde_json::Value, cookies: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }

    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Pulls a cookie's value out of a response's `Set-Cookie` headers.
pub fn extract_cookie<B>(response: &Response<B>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let (pair, _attrs) = cookie.split_once(';').unwrap_or((cookie, ""));
            let (cookie_name, value) = pair.split_once('=')?;
            (cookie_name == name).then(|| value.to_string())
        })
}
