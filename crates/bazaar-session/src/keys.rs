//! Session record key format.
//!
//! The `refresh_token:<userId>` format is part of the store's external
//! contract: monitoring and administration tooling reads these keys
//! directly, so the format must stay stable.

use uuid::Uuid;

/// Key under which a user's current refresh token is stored.
pub fn refresh_token(user_id: Uuid) -> String {
    format!("refresh_token:{user_id}")
}
