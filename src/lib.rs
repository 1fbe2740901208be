//! # Flight Search Aggregation Engine
//!
//! Answers "what flights exist between A and B on date D" by fanning out to
//! several independent flight-data providers concurrently, merging their
//! results into one annotated, ranked list, and memoizing the merged result
//! in a shared cache for a short window.
//!
//! # Architecture
//!
//! The crate is organized in layers:
//!
//! - [`domain`]: The [`Flight`](domain::entities::Flight) value record and
//!   validated value objects (airport codes, sort keys).
//! - [`application`]: The aggregation pipeline — cache-aside lookup,
//!   concurrent provider fan-out with partial-failure tolerance,
//!   cheapest/fastest annotation, and stable ranking.
//! - [`infrastructure`]: Ports and adapters for the cache (Redis, in-memory)
//!   and the upstream flight providers (Amadeus, Duffel, SerpApi).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use flight_search::application::services::{AggregationConfig, FlightAggregationEngine};
//! use flight_search::application::use_cases::{SearchFlightsInput, SearchFlightsUseCase};
//! use flight_search::infrastructure::cache::InMemoryFlightCache;
//! use flight_search::infrastructure::providers::StubFlightProvider;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = FlightAggregationEngine::new(
//!     vec![Arc::new(StubFlightProvider::default())],
//!     Arc::new(InMemoryFlightCache::new()),
//!     AggregationConfig::default(),
//! );
//! let use_case = SearchFlightsUseCase::new(engine);
//!
//! let input = SearchFlightsInput::new("LAX", "JFK", NaiveDate::from_ymd_opt(2026, 9, 1).ok_or("bad date")?);
//! let output = use_case.execute(input).await?;
//! println!("{} flights found", output.data.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
