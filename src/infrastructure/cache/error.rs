//! # Cache Errors
//!
//! Error types for cache operations. The aggregation engine absorbs these
//! fail-open: a read error degrades to a cache miss, a write error is logged
//! and the computed result is still returned.

use thiserror::Error;

/// Error type for cache operations.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// Failed to connect to the cache backend.
    #[error("cache connection error: {0}")]
    Connection(String),

    /// A read or write command failed.
    #[error("cache command error: {0}")]
    Command(String),

    /// A stored payload could not be serialized or deserialized.
    #[error("cache serialization error: {0}")]
    Serialization(String),
}

impl CacheError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a command error.
    #[must_use]
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
