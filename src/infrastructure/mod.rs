//! # Infrastructure Layer
//!
//! Ports and adapters for external collaborators:
//!
//! - [`cache`]: Key/value cache port with Redis and in-memory backends.
//! - [`providers`]: Flight provider port with Amadeus, Duffel, and SerpApi
//!   adapters plus a deterministic stub.

pub mod cache;
pub mod providers;
