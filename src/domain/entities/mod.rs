//! # Domain Entities
//!
//! The flight value record and search result container.

pub mod flight;

pub use flight::{Flight, SearchResult};
