//! # Flight Provider Port
//!
//! Port definition for upstream flight-data sources.
//!
//! Every adapter implements [`FlightProvider`]; the aggregation engine holds
//! an ordered collection of trait objects and is agnostic to their concrete
//! identity. Provider count and identity are a deployment-time wiring
//! concern.

use crate::domain::entities::Flight;
use crate::domain::value_objects::{AirportCode, ProviderId};
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;

/// Normalized search parameters handed to every adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Origin airport code.
    pub origin: AirportCode,
    /// Destination airport code.
    pub destination: AirportCode,
    /// Departure calendar date (time of day is not part of a search).
    pub date: NaiveDate,
}

impl SearchQuery {
    /// Creates a search query.
    #[must_use]
    pub fn new(origin: AirportCode, destination: AirportCode, date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            date,
        }
    }
}

/// Port for one upstream flight-data source.
#[async_trait]
pub trait FlightProvider: Send + Sync + fmt::Debug {
    /// Stable identifier for this provider, used for flight-id namespacing
    /// and failure attribution in logs.
    fn provider_id(&self) -> &ProviderId;

    /// Searches the provider for flights matching the query.
    ///
    /// An empty list is a valid response (the provider has no offers for
    /// this route and date).
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`](super::ProviderError) on network,
    /// authentication, or payload failures. The caller treats any error as
    /// this provider contributing zero flights for the cycle.
    async fn search_flights(&self, query: &SearchQuery) -> ProviderResult<Vec<Flight>>;
}
