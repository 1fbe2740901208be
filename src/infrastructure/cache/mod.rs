//! # Cache Infrastructure
//!
//! Key/value cache port consumed by the aggregation engine, with a
//! Redis-backed implementation for deployment and an in-process TTL map for
//! tests and local development.

pub mod error;
pub mod memory;
pub mod redis;
pub mod traits;

pub use error::{CacheError, CacheResult};
pub use memory::InMemoryFlightCache;
pub use redis::RedisFlightCache;
pub use traits::FlightCache;
