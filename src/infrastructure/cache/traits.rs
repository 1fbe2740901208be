//! # Flight Cache Port
//!
//! Object-safe cache interface consumed by the aggregation engine.
//!
//! Keys are opaque strings; values are opaque serialized payloads (the
//! engine stores JSON). The port mirrors the scan / set-with-TTL / delete
//! shape of the cache collaborator: `scan` distinguishes "absent" from
//! "failed" so the engine can fail open on errors.

use crate::infrastructure::cache::error::CacheResult;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Port for the shared key/value cache.
///
/// Implementations must be safe for concurrent use; the engine performs a
/// read-then-conditionally-write per call with no transactional linkage
/// between the two (concurrent identical searches may each miss and each
/// recompute — cache stampede is accepted given the short TTL).
#[async_trait]
pub trait FlightCache: Send + Sync + fmt::Debug {
    /// Looks up a key, returning the stored payload if present.
    ///
    /// # Errors
    ///
    /// Returns a [`CacheError`](super::CacheError) if the backend is
    /// unreachable or the command fails. A missing key is `Ok(None)`, not an
    /// error.
    async fn scan(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a payload under a key with an expiry.
    ///
    /// # Errors
    ///
    /// Returns a [`CacheError`](super::CacheError) if the backend is
    /// unreachable or the command fails.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Deletes the given keys. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`CacheError`](super::CacheError) if the backend is
    /// unreachable or the command fails.
    async fn delete(&self, keys: &[String]) -> CacheResult<()>;
}
