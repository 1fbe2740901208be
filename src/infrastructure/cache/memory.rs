//! # In-Memory Cache
//!
//! Process-local [`FlightCache`] with per-entry TTL, used by tests and local
//! development where no Redis instance is available. Expired entries are
//! dropped lazily on read.

use crate::infrastructure::cache::error::CacheResult;
use crate::infrastructure::cache::traits::FlightCache;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process TTL cache.
#[derive(Debug, Default)]
pub struct InMemoryFlightCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryFlightCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    /// Returns true when no live entries exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FlightCache for InMemoryFlightCache {
    async fn scan(&self, key: &str) -> CacheResult<Option<String>> {
        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.entries.write().remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> CacheResult<()> {
        let mut entries = self.entries.write();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_scan() {
        let cache = InMemoryFlightCache::new();
        cache
            .set("k", "payload", Duration::from_secs(30))
            .await
            .unwrap();

        let value = cache.scan("k").await.unwrap();
        assert_eq!(value.as_deref(), Some("payload"));
    }

    #[tokio::test]
    async fn scan_missing_key() {
        let cache = InMemoryFlightCache::new();
        assert!(cache.scan("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn entries_expire() {
        let cache = InMemoryFlightCache::new();
        cache
            .set("k", "payload", Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(25)).await;

        assert!(cache.scan("k").await.unwrap().is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_keys() {
        let cache = InMemoryFlightCache::new();
        cache.set("a", "1", Duration::from_secs(30)).await.unwrap();
        cache.set("b", "2", Duration::from_secs(30)).await.unwrap();

        cache
            .delete(&["a".to_string(), "missing".to_string()])
            .await
            .unwrap();

        assert!(cache.scan("a").await.unwrap().is_none());
        assert_eq!(cache.scan("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn overwrite_refreshes_value() {
        let cache = InMemoryFlightCache::new();
        cache.set("k", "old", Duration::from_secs(30)).await.unwrap();
        cache.set("k", "new", Duration::from_secs(30)).await.unwrap();
        assert_eq!(cache.scan("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }
}
