//! # SerpApi Provider
//!
//! Adapter for the SerpApi Google Flights engine. The engine requires a
//! return date, so a 7-day round trip is assumed; only the outbound offers
//! are consumed. Durations arrive as whole minutes and prices as JSON
//! numbers.

use crate::domain::entities::Flight;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::parse;
use crate::infrastructure::providers::traits::{FlightProvider, SearchQuery};
use async_trait::async_trait;
use chrono::Duration;
use serde::Deserialize;
use tracing::error;

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";

/// Days between outbound and assumed return, since `return_date` is a
/// required engine parameter.
const ASSUMED_RETURN_DAYS: i64 = 7;

/// SerpApi Google Flights adapter.
#[derive(Debug)]
pub struct SerpProvider {
    id: ProviderId,
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl SerpProvider {
    /// Creates an adapter against the SerpApi production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`](super::ProviderError) if the HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>, timeout_ms: u64) -> ProviderResult<Self> {
        Self::with_base_url(api_key, timeout_ms, DEFAULT_BASE_URL)
    }

    /// Creates an adapter against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`](super::ProviderError) if the HTTP client
    /// cannot be built.
    pub fn with_base_url(
        api_key: impl Into<String>,
        timeout_ms: u64,
        base_url: impl Into<String>,
    ) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("serp"),
            http: HttpClient::new(timeout_ms)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl FlightProvider for SerpProvider {
    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    async fn search_flights(&self, query: &SearchQuery) -> ProviderResult<Vec<Flight>> {
        let return_date = query.date + Duration::days(ASSUMED_RETURN_DAYS);
        let response: SearchResponse = self
            .http
            .get_json(
                &self.base_url,
                &[
                    ("api_key", self.api_key.clone()),
                    ("engine", "google_flights".to_string()),
                    ("departure_id", query.origin.to_string()),
                    ("arrival_id", query.destination.to_string()),
                    ("outbound_date", query.date.format("%Y-%m-%d").to_string()),
                    ("return_date", return_date.format("%Y-%m-%d").to_string()),
                ],
                None,
            )
            .await?;

        let offers = response
            .best_flights
            .into_iter()
            .chain(response.other_flights);

        let mut flights = Vec::new();
        for offer in offers {
            let (Some(first_leg), Some(last_leg)) = (offer.flights.first(), offer.flights.last())
            else {
                continue;
            };

            let Some(departure_at) = parse::parse_datetime(&first_leg.departure_airport.time)
            else {
                error!(provider = %self.id, at = %first_leg.departure_airport.time, "failed to parse departure date");
                continue;
            };
            let Some(arrival_at) = parse::parse_datetime(&last_leg.arrival_airport.time) else {
                error!(provider = %self.id, at = %last_leg.arrival_airport.time, "failed to parse arrival date");
                continue;
            };

            let Some(price) = parse::f64_to_minor_units(offer.price) else {
                error!(provider = %self.id, price = offer.price, "failed to convert price");
                continue;
            };

            let flight_number = first_leg.flight_number.clone();
            flights.push(Flight {
                id: format!("serp-{}", flight_number.to_lowercase().replace(' ', "-")),
                flight_number,
                origin: query.origin.to_string(),
                destination: query.destination.to_string(),
                departure_at,
                arrival_at,
                duration: offer.total_duration.max(0).saturating_mul(60),
                price,
                is_cheapest: false,
                is_fastest: false,
            });
        }

        Ok(flights)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    best_flights: Vec<Offer>,
    #[serde(default)]
    other_flights: Vec<Offer>,
}

#[derive(Debug, Deserialize)]
struct Offer {
    #[serde(default)]
    flights: Vec<Leg>,
    #[serde(default)]
    total_duration: i64,
    #[serde(default)]
    price: f64,
}

#[derive(Debug, Deserialize)]
struct Leg {
    #[serde(default)]
    flight_number: String,
    #[serde(default)]
    departure_airport: Airport,
    #[serde(default)]
    arrival_airport: Airport,
}

#[derive(Debug, Default, Deserialize)]
struct Airport {
    #[serde(default)]
    time: String,
}
