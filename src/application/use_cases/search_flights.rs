//! # Search Flights Use Case
//!
//! The single inbound operation: takes raw `SearchRequest` fields from the
//! calling layer, validates them defensively (primary validation belongs to
//! the transport layer), and hands normalized values to the aggregation
//! engine. Malformed input is surfaced immediately without any fan-out.

use crate::application::error::ApplicationResult;
use crate::application::services::flight_aggregation::FlightAggregationEngine;
use crate::domain::entities::Flight;
use crate::domain::value_objects::{AirportCode, SortBy, SortOrder};
use crate::infrastructure::providers::SearchQuery;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw search request fields as received from the calling layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFlightsInput {
    /// Origin airport code (required, three letters).
    pub origin: String,
    /// Destination airport code (required, three letters).
    pub destination: String,
    /// Departure calendar date; any time-of-day component has already been
    /// dropped by the calling layer.
    pub date: NaiveDate,
    /// Sort key token; empty or absent defaults to `price`.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort direction token; empty or absent defaults to `asc`.
    #[serde(default)]
    pub sort_order: Option<String>,
}

impl SearchFlightsInput {
    /// Creates an input with default sorting (price ascending).
    #[must_use]
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Sets the sort key token.
    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the sort direction token.
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }
}

/// Successful search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFlightsOutput {
    /// Flights in ranked order, never empty.
    pub data: Vec<Flight>,
}

/// Use case wiring validation in front of the aggregation engine.
#[derive(Debug)]
pub struct SearchFlightsUseCase {
    engine: FlightAggregationEngine,
}

impl SearchFlightsUseCase {
    /// Creates the use case around an engine.
    #[must_use]
    pub fn new(engine: FlightAggregationEngine) -> Self {
        Self { engine }
    }

    /// Validates the input and executes the search.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed airport codes or sort
    /// tokens, and [`ApplicationError::NotFound`](crate::application::error::ApplicationError::NotFound)
    /// when no provider produced a flight.
    pub async fn execute(&self, input: SearchFlightsInput) -> ApplicationResult<SearchFlightsOutput> {
        let origin = AirportCode::new(&input.origin)?;
        let destination = AirportCode::new(&input.destination)?;
        let sort_by = SortBy::parse_or_default(input.sort_by.as_deref())?;
        let sort_order = SortOrder::parse_or_default(input.sort_order.as_deref())?;

        let query = SearchQuery::new(origin, destination, input.date);
        let result = self.engine.search(&query, sort_by, sort_order).await?;

        Ok(SearchFlightsOutput { data: result.data })
    }
}
