//! # Application Layer
//!
//! The aggregation pipeline and its inbound call surface.
//!
//! - [`services`]: The [`FlightAggregationEngine`](services::FlightAggregationEngine)
//!   plus the annotator and ranker it composes.
//! - [`use_cases`]: The [`SearchFlightsUseCase`](use_cases::SearchFlightsUseCase)
//!   exposed to the request-handling layer.
//! - [`error`]: The application error taxonomy.

pub mod error;
pub mod services;
pub mod use_cases;
