//! # Redis Cache
//!
//! [`FlightCache`] implementation backed by Redis, using a multiplexed
//! connection manager so one instance can serve concurrent searches.

use crate::infrastructure::cache::error::{CacheError, CacheResult};
use crate::infrastructure::cache::traits::FlightCache;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::time::Duration;

/// Redis-backed flight cache.
#[derive(Clone)]
pub struct RedisFlightCache {
    conn: ConnectionManager,
}

impl fmt::Debug for RedisFlightCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisFlightCache").finish_non_exhaustive()
    }
}

impl RedisFlightCache {
    /// Connects to Redis at the given URL (e.g. `redis://localhost:6379/0`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid or the
    /// initial connection fails.
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::connection(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::connection(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl FlightCache for RedisFlightCache {
    async fn scan(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::command(e.to_string()))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        // SET EX takes whole seconds; sub-second TTLs round up to 1s.
        let ttl_secs = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| CacheError::command(e.to_string()))
    }

    async fn delete(&self, keys: &[String]) -> CacheResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(keys)
            .await
            .map_err(|e| CacheError::command(e.to_string()))
    }
}
