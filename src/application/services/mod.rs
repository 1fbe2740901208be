//! # Application Services
//!
//! The aggregation pipeline stages:
//!
//! - [`FlightAggregationEngine`]: cache-aside orchestration and concurrent
//!   provider fan-out with partial-failure tolerance.
//! - [`annotator`]: marks the single cheapest and single fastest flight.
//! - [`ranker`]: stable comparator-driven ordering.

pub mod annotator;
pub mod flight_aggregation;
pub mod ranker;

pub use annotator::annotate;
pub use flight_aggregation::{AggregationConfig, FanOutStats, FlightAggregationEngine};
pub use ranker::sort_flights;
