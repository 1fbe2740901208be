//! # Amadeus Provider
//!
//! Adapter for the Amadeus flight-offers API.
//!
//! Authenticates with OAuth2 client credentials and caches the access token
//! until shortly before expiry; the token refreshes lazily on the next
//! search. Offer prices arrive as decimal strings (`grandTotal`) and
//! durations as ISO-8601 (`PT6H15M`).

use crate::domain::entities::Flight;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::parse;
use crate::infrastructure::providers::traits::{FlightProvider, SearchQuery};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::error;

const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Refresh the token this long before the advertised expiry.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 30;

#[derive(Debug, Clone)]
struct TokenState {
    access_token: String,
    expires_at: Instant,
}

/// Amadeus flight-offers adapter.
#[derive(Debug)]
pub struct AmadeusProvider {
    id: ProviderId,
    http: HttpClient,
    base_url: String,
    api_key: String,
    api_secret: String,
    token: RwLock<Option<TokenState>>,
}

impl AmadeusProvider {
    /// Creates an adapter against the Amadeus test environment.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the HTTP client cannot be
    /// built.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        timeout_ms: u64,
    ) -> ProviderResult<Self> {
        Self::with_base_url(api_key, api_secret, timeout_ms, DEFAULT_BASE_URL)
    }

    /// Creates an adapter against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the HTTP client cannot be
    /// built.
    pub fn with_base_url(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        timeout_ms: u64,
        base_url: impl Into<String>,
    ) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("amadeus"),
            http: HttpClient::new(timeout_ms)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            token: RwLock::new(None),
        })
    }

    async fn access_token(&self) -> ProviderResult<String> {
        if let Some(state) = self.token.read().await.as_ref() {
            if state.expires_at > Instant::now() {
                return Ok(state.access_token.clone());
            }
        }
        self.authenticate().await
    }

    async fn authenticate(&self) -> ProviderResult<String> {
        let url = format!("{}/v1/security/oauth2/token", self.base_url);
        let response: AuthResponse = self
            .http
            .post_form(
                &url,
                &[
                    ("grant_type", "client_credentials"),
                    ("client_id", self.api_key.as_str()),
                    ("client_secret", self.api_secret.as_str()),
                ],
            )
            .await?;

        if response.access_token.is_empty() {
            return Err(ProviderError::authentication("access token is empty"));
        }

        let lifetime = response
            .expires_in
            .saturating_sub(TOKEN_EXPIRY_MARGIN_SECS)
            .max(1);
        let state = TokenState {
            access_token: response.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime.unsigned_abs()),
        };
        *self.token.write().await = Some(state);

        Ok(response.access_token)
    }
}

#[async_trait]
impl FlightProvider for AmadeusProvider {
    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    async fn search_flights(&self, query: &SearchQuery) -> ProviderResult<Vec<Flight>> {
        let token = self.access_token().await?;

        let url = format!("{}/v2/shopping/flight-offers", self.base_url);
        let response: OffersResponse = self
            .http
            .get_json(
                &url,
                &[
                    ("originLocationCode", query.origin.to_string()),
                    ("destinationLocationCode", query.destination.to_string()),
                    ("departureDate", query.date.format("%Y-%m-%d").to_string()),
                    ("adults", "1".to_string()),
                ],
                Some(&token),
            )
            .await?;

        let mut flights = Vec::with_capacity(response.data.len());
        for offer in response.data {
            let Some(itinerary) = offer.itineraries.first() else {
                continue;
            };
            let (Some(first_segment), Some(last_segment)) =
                (itinerary.segments.first(), itinerary.segments.last())
            else {
                continue;
            };

            let Some(departure_at) = parse::parse_datetime(&first_segment.departure.at) else {
                error!(provider = %self.id, at = %first_segment.departure.at, "failed to parse departure date");
                continue;
            };
            let Some(arrival_at) = parse::parse_datetime(&last_segment.arrival.at) else {
                error!(provider = %self.id, at = %last_segment.arrival.at, "failed to parse arrival date");
                continue;
            };
            let Some(duration) = parse::parse_iso8601_duration(&itinerary.duration) else {
                error!(provider = %self.id, duration = %itinerary.duration, "failed to parse duration");
                continue;
            };

            let price = parse::decimal_to_minor_units(&offer.price.grand_total).ok_or_else(
                || {
                    ProviderError::invalid_response(format!(
                        "unparseable price: {}",
                        offer.price.grand_total
                    ))
                },
            )?;

            let flight_number = if first_segment.carrier_code.is_empty() {
                first_segment.number.clone()
            } else {
                format!("{} {}", first_segment.carrier_code, first_segment.number)
            };

            flights.push(Flight {
                id: format!("amadeus-{}", offer.id.to_lowercase()),
                flight_number,
                origin: query.origin.to_string(),
                destination: query.destination.to_string(),
                departure_at,
                arrival_at,
                duration,
                price,
                is_cheapest: false,
                is_fastest: false,
            });
        }

        Ok(flights)
    }
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct OffersResponse {
    #[serde(default)]
    data: Vec<Offer>,
}

#[derive(Debug, Deserialize)]
struct Offer {
    #[serde(default)]
    id: String,
    #[serde(default)]
    itineraries: Vec<Itinerary>,
    price: OfferPrice,
}

#[derive(Debug, Deserialize)]
struct Itinerary {
    #[serde(default)]
    duration: String,
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    departure: SegmentPoint,
    arrival: SegmentPoint,
    #[serde(default, rename = "carrierCode")]
    carrier_code: String,
    #[serde(default)]
    number: String,
}

#[derive(Debug, Deserialize)]
struct SegmentPoint {
    #[serde(default)]
    at: String,
}

#[derive(Debug, Deserialize)]
struct OfferPrice {
    #[serde(rename = "grandTotal")]
    grand_total: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AirportCode;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn query() -> SearchQuery {
        SearchQuery::new(
            AirportCode::new("LAX").unwrap(),
            AirportCode::new("JFK").unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        )
    }

    async fn mount_token(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/v1/security/oauth2/token"))
            .and(body_string_contains("client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "token-1",
                "expires_in": 1799
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn parses_offers_into_flights() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .and(query_param("originLocationCode", "LAX"))
            .and(query_param("destinationLocationCode", "JFK"))
            .and(query_param("departureDate", "2026-09-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "1",
                    "itineraries": [{
                        "duration": "PT5H15M",
                        "segments": [{
                            "departure": { "at": "2026-09-01T09:00:00" },
                            "arrival": { "at": "2026-09-01T17:15:00" },
                            "carrierCode": "AA",
                            "number": "117"
                        }]
                    }],
                    "price": { "grandTotal": "325.40" }
                }]
            })))
            .mount(&server)
            .await;

        let provider =
            AmadeusProvider::with_base_url("key", "secret", 5000, server.uri()).unwrap();
        let flights = provider.search_flights(&query()).await.unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].id, "amadeus-1");
        assert_eq!(flights[0].flight_number, "AA 117");
        assert_eq!(flights[0].origin, "LAX");
        assert_eq!(flights[0].destination, "JFK");
        assert_eq!(flights[0].duration, 5 * 3600 + 15 * 60);
        assert_eq!(flights[0].price, 32_540);
        assert!(!flights[0].is_cheapest);
    }

    #[tokio::test]
    async fn skips_offers_with_unparseable_dates() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "id": "1",
                        "itineraries": [{
                            "duration": "PT2H",
                            "segments": [{
                                "departure": { "at": "not a date" },
                                "arrival": { "at": "2026-09-01T11:00:00" }
                            }]
                        }],
                        "price": { "grandTotal": "100.00" }
                    },
                    {
                        "id": "2",
                        "itineraries": [{
                            "duration": "PT2H",
                            "segments": [{
                                "departure": { "at": "2026-09-01T09:00:00" },
                                "arrival": { "at": "2026-09-01T11:00:00" }
                            }]
                        }],
                        "price": { "grandTotal": "100.00" }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let provider =
            AmadeusProvider::with_base_url("key", "secret", 5000, server.uri()).unwrap();
        let flights = provider.search_flights(&query()).await.unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].id, "amadeus-2");
    }

    #[tokio::test]
    async fn unparseable_price_fails_the_call() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "1",
                    "itineraries": [{
                        "duration": "PT2H",
                        "segments": [{
                            "departure": { "at": "2026-09-01T09:00:00" },
                            "arrival": { "at": "2026-09-01T11:00:00" }
                        }]
                    }],
                    "price": { "grandTotal": "free" }
                }]
            })))
            .mount(&server)
            .await;

        let provider =
            AmadeusProvider::with_base_url("key", "secret", 5000, server.uri()).unwrap();
        let result = provider.search_flights(&query()).await;
        assert!(matches!(result, Err(ProviderError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn token_is_reused_across_searches() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/security/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "token-1",
                "expires_in": 1799
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let provider =
            AmadeusProvider::with_base_url("key", "secret", 5000, server.uri()).unwrap();
        provider.search_flights(&query()).await.unwrap();
        provider.search_flights(&query()).await.unwrap();
    }

    #[tokio::test]
    async fn empty_token_is_an_authentication_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/security/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "",
                "expires_in": 1799
            })))
            .mount(&server)
            .await;

        let provider =
            AmadeusProvider::with_base_url("key", "secret", 5000, server.uri()).unwrap();
        let result = provider.search_flights(&query()).await;
        assert!(matches!(result, Err(ProviderError::Authentication { .. })));
    }
}
