//! # Use Cases
//!
//! Inbound operations exposed to the request-handling layer.

pub mod search_flights;

pub use search_flights::{SearchFlightsInput, SearchFlightsOutput, SearchFlightsUseCase};
