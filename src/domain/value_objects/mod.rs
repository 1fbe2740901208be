//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`AirportCode`]: IATA three-letter airport code, stored uppercase.
//! - [`SortBy`], [`SortOrder`]: Caller-selected ranking key and direction.
//! - [`ProviderId`]: String identifier for an upstream flight provider.

pub mod airport_code;
pub mod provider_id;
pub mod sort;

pub use airport_code::AirportCode;
pub use provider_id::ProviderId;
pub use sort::{SortBy, SortOrder};
