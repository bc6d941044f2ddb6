//! Redis session store client.
//!
//! Unlike a cache, this store is authoritative for session state, so
//! failures are never silently converted into "no session": every operation
//! returns a [`SessionStoreError`] the caller must handle. Absent keys
//! (including records Redis already expired) are the `Ok(None)` case of
//! [`SessionStore::get`], never an error.

use std::time::Duration;

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::keys;

/// Redis session store with automatic reconnection.
#[derive(Clone)]
pub struct SessionStore {
    conn: ConnectionManager,
    op_timeout: Duration,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("op_timeout", &self.op_timeout)
            .finish_non_exhaustive()
    }
}

/// Error type for session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("session store operation timed out")]
    Timeout,
}

impl SessionStore {
    /// Connects to Redis and returns a store handle.
    ///
    /// `op_timeout` bounds every subsequent operation, including this
    /// initial connection.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Connection` if the connection fails and
    /// `SessionStoreError::Timeout` if it does not complete in time.
    pub async fn connect(redis_url: &str, op_timeout: Duration) -> Result<Self, SessionStoreError> {
        let client = Client::open(redis_url)?;
        let conn = tokio::time::timeout(op_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| SessionStoreError::Timeout)??;

        Ok(Self { conn, op_timeout })
    }

    /// Upserts the session record for a user, resetting its TTL.
    ///
    /// Overwrites whatever record existed before: the previous refresh
    /// token stops matching and will fail later refresh attempts.
    #[instrument(skip(self, refresh_token), fields(store.operation = "SETEX"))]
    pub async fn put(
        &self,
        user_id: Uuid,
        refresh_token: &str,
        ttl: Duration,
    ) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();
        let key = keys::refresh_token(user_id);

        self.bounded(conn.set_ex::<_, _, ()>(&key, refresh_token, ttl.as_secs()))
            .await?;

        debug!(store.key = %key, store.ttl_secs = %ttl.as_secs(), "session record stored");

        Ok(())
    }

    /// Returns the user's current refresh token, or `None` when no record
    /// exists (never written, deleted, or expired by TTL).
    #[instrument(skip(self), fields(store.operation = "GET"))]
    pub async fn get(&self, user_id: Uuid) -> Result<Option<String>, SessionStoreError> {
        let mut conn = self.conn.clone();
        let key = keys::refresh_token(user_id);

        let stored = self.bounded(conn.get::<_, Option<String>>(&key)).await?;

        debug!(store.key = %key, store.found = stored.is_some(), "session record read");

        Ok(stored)
    }

    /// Deletes the user's session record. Idempotent: deleting an absent
    /// record succeeds.
    #[instrument(skip(self), fields(store.operation = "DEL"))]
    pub async fn delete(&self, user_id: Uuid) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();
        let key = keys::refresh_token(user_id);

        self.bounded(conn.del::<_, ()>(&key)).await?;

        debug!(store.key = %key, "session record deleted");

        Ok(())
    }

    async fn bounded<T>(
        &self,
        op: impl Future<Output = redis::RedisResult<T>>,
    ) -> Result<T, SessionStoreError> {
        match tokio::time::timeout(self.op_timeout, op).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(SessionStoreError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a running Redis instance.

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_put_get_delete_roundtrip() {
        let store = SessionStore::connect("redis://localhost:6379", Duration::from_secs(5))
            .await
            .unwrap();

        let user_id = Uuid::new_v4();

        store
            .put(user_id, "refresh-token-value", Duration::from_secs(60))
            .await
            .unwrap();

        let stored = store.get(user_id).await.unwrap();
        assert_eq!(stored.as_deref(), Some("refresh-token-value"));

        store.delete(user_id).await.unwrap();
        assert_eq!(store.get(user_id).await.unwrap(), None);

        // Idempotent delete of the now-absent record.
        store.delete(user_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_put_overwrites_previous_record() {
        let store = SessionStore::connect("redis://localhost:6379", Duration::from_secs(5))
            .await
            .unwrap();

        let user_id = Uuid::new_v4();

        store
            .put(user_id, "first-token", Duration::from_secs(60))
            .await
            .unwrap();
        store
            .put(user_id, "second-token", Duration::from_secs(60))
            .await
            .unwrap();

        let stored = store.get(user_id).await.unwrap();
        assert_eq!(stored.as_deref(), Some("second-token"));

        store.delete(user_id).await.unwrap();
    }
}
