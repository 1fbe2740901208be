//! # Domain Layer
//!
//! Core flight-search types with no infrastructure dependencies.
//!
//! This module contains:
//! - [`entities`]: The [`Flight`](entities::Flight) value record and
//!   [`SearchResult`](entities::SearchResult).
//! - [`value_objects`]: Validated types such as
//!   [`AirportCode`](value_objects::AirportCode) and the sort enums.
//! - [`errors`]: Domain validation errors.

pub mod entities;
pub mod errors;
pub mod value_objects;
