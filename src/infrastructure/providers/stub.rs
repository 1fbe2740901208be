//! # Stub Provider
//!
//! Deterministic in-process [`FlightProvider`] used in local development and
//! tests, mirroring the mock provider wiring of deployments without real
//! provider credentials.

use crate::domain::entities::Flight;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::traits::{FlightProvider, SearchQuery};
use async_trait::async_trait;
use chrono::{Duration, NaiveTime, TimeZone, Utc};

/// Synthetic offers derived deterministically from the query.
#[derive(Debug)]
pub struct StubFlightProvider {
    id: ProviderId,
    fixed: Option<Vec<Flight>>,
}

impl Default for StubFlightProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StubFlightProvider {
    /// Creates a stub that synthesizes two offers per query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ProviderId::new("stub"),
            fixed: None,
        }
    }

    /// Creates a stub that always returns the given flights verbatim.
    #[must_use]
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self {
            id: ProviderId::new("stub"),
            fixed: Some(flights),
        }
    }

    fn synthesize(&self, query: &SearchQuery) -> Vec<Flight> {
        let offers = [("ST 101", 9, 0, 6 * 3600, 25_000_i64), ("ST 202", 13, 30, 7 * 3600 + 1800, 18_000)];
        offers
            .iter()
            .map(|(number, hour, minute, duration, price)| {
                let naive = query.date.and_time(
                    NaiveTime::from_hms_opt(*hour, *minute, 0).unwrap_or_default(),
                );
                let departure_at = Utc.from_utc_datetime(&naive).fixed_offset();
                let arrival_at = departure_at + Duration::seconds(*duration);
                Flight {
                    id: format!(
                        "stub-{}-{}-{}",
                        query.origin.to_string().to_lowercase(),
                        query.destination.to_string().to_lowercase(),
                        number.to_lowercase().replace(' ', "-")
                    ),
                    flight_number: (*number).to_string(),
                    origin: query.origin.to_string(),
                    destination: query.destination.to_string(),
                    departure_at,
                    arrival_at,
                    duration: *duration,
                    price: *price,
                    is_cheapest: false,
                    is_fastest: false,
                }
            })
            .collect()
    }
}

#[async_trait]
impl FlightProvider for StubFlightProvider {
    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    async fn search_flights(&self, query: &SearchQuery) -> ProviderResult<Vec<Flight>> {
        if let Some(fixed) = &self.fixed {
            return Ok(fixed.clone());
        }
        Ok(self.synthesize(query))
    }
}
