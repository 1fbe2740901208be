//! # Duffel Provider
//!
//! Adapter for the Duffel offer-requests API. Searches are POSTed as an
//! offer request for one slice and one adult passenger; offers come back
//! with decimal `total_amount` strings and ISO-8601 slice durations.

use crate::domain::entities::Flight;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::parse;
use crate::infrastructure::providers::traits::{FlightProvider, SearchQuery};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::error;

const DEFAULT_BASE_URL: &str = "https://api.duffel.com";

/// Duffel offer-requests adapter.
#[derive(Debug)]
pub struct DuffelProvider {
    id: ProviderId,
    http: HttpClient,
    base_url: String,
}

impl DuffelProvider {
    /// Creates an adapter against the Duffel production API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the API key is not a valid header value
    /// or the HTTP client cannot be built.
    pub fn new(api_key: &str, timeout_ms: u64) -> ProviderResult<Self> {
        Self::with_base_url(api_key, timeout_ms, DEFAULT_BASE_URL)
    }

    /// Creates an adapter against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the API key is not a valid header value
    /// or the HTTP client cannot be built.
    pub fn with_base_url(
        api_key: &str,
        timeout_ms: u64,
        base_url: impl Into<String>,
    ) -> ProviderResult<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ProviderError::authentication(e.to_string()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert("Duffel-Version", HeaderValue::from_static("v2"));

        Ok(Self {
            id: ProviderId::new("duffel"),
            http: HttpClient::with_headers(timeout_ms, headers)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FlightProvider for DuffelProvider {
    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    async fn search_flights(&self, query: &SearchQuery) -> ProviderResult<Vec<Flight>> {
        let url = format!("{}/air/offer_requests", self.base_url);
        let body = OfferRequestBody {
            data: OfferRequestData {
                slices: vec![OfferRequestSlice {
                    origin: query.origin.to_string(),
                    destination: query.destination.to_string(),
                    departure_date: query.date.format("%Y-%m-%d").to_string(),
                }],
                passengers: vec![OfferRequestPassenger {
                    kind: "adult".to_string(),
                }],
            },
        };

        let response: OffersResponse = self.http.post_json(&url, &body).await?;

        let mut flights = Vec::with_capacity(response.data.offers.len());
        for offer in response.data.offers {
            let Some(slice) = offer.slices.first() else {
                continue;
            };
            let (Some(first_segment), Some(last_segment)) =
                (slice.segments.first(), slice.segments.last())
            else {
                continue;
            };

            let Some(departure_at) = parse::parse_datetime(&first_segment.departing_at) else {
                error!(provider = %self.id, at = %first_segment.departing_at, "failed to parse departure date");
                continue;
            };
            let Some(arrival_at) = parse::parse_datetime(&last_segment.arriving_at) else {
                error!(provider = %self.id, at = %last_segment.arriving_at, "failed to parse arrival date");
                continue;
            };
            let Some(duration) = parse::parse_iso8601_duration(&slice.duration) else {
                error!(provider = %self.id, duration = %slice.duration, "failed to parse duration");
                continue;
            };

            let price = parse::decimal_to_minor_units(&offer.total_amount).ok_or_else(|| {
                ProviderError::invalid_response(format!(
                    "unparseable price: {}",
                    offer.total_amount
                ))
            })?;

            let mut flight_number = first_segment.marketing_carrier_flight_number.clone();
            if !first_segment.marketing_carrier.iata_code.is_empty() {
                flight_number = format!(
                    "{} {}",
                    first_segment.marketing_carrier.iata_code, flight_number
                );
            }

            flights.push(Flight {
                id: format!("duffel-{}", flight_number.to_lowercase().replace(' ', "-")),
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

#[derive(Debug, Serialize)]
struct OfferRequestBody {
    data: OfferRequestData,
}

#[derive(Debug, Serialize)]
struct OfferRequestData {
    slices: Vec<OfferRequestSlice>,
    passengers: Vec<OfferRequestPassenger>,
}

#[derive(Debug, Serialize)]
struct OfferRequestSlice {
    origin: String,
    destination: String,
    departure_date: String,
}

#[derive(Debug, Serialize)]
struct OfferRequestPassenger {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct OffersResponse {
    data: OffersData,
}

#[derive(Debug, Deserialize)]
struct OffersData {
    #[serde(default)]
    offers: Vec<Offer>,
}

#[derive(Debug, Deserialize)]
struct Offer {
    #[serde(default)]
    total_amount: String,
    #[serde(default)]
    slices: Vec<Slice>,
}

#[derive(Debug, Deserialize)]
struct Slice {
    #[serde(default)]
    duration: String,
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    #[serde(default)]
    departing_at: String,
    #[serde(default)]
    arriving_at: String,
    #[serde(default)]
    marketing_carrier_flight_number: String,
    #[serde(default)]
    marketing_carrier: MarketingCarrier,
}

#[derive(Debug, Default, Deserialize)]
struct MarketingCarrier {
    #[serde(default)]
    iata_code: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AirportCode;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn query() -> SearchQuery {
        SearchQuery::new(
            AirportCode::new("GRU").unwrap(),
            AirportCode::new("LIS").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
        )
    }

    #[tokio::test]
    async fn parses_offers_into_flights() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/air/offer_requests"))
            .and(header("Duffel-Version", "v2"))
            .and(body_partial_json(serde_json::json!({
                "data": {
                    "slices": [{
                        "origin": "GRU",
                        "destination": "LIS",
                        "departure_date": "2026-10-12"
                    }]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "offers": [{
                        "total_amount": "842.19",
                        "slices": [{
                            "duration": "PT10H25M",
                            "segments": [{
                                "departing_at": "2026-10-12T22:05:00",
                                "arriving_at": "2026-10-13T12:30:00",
                                "marketing_carrier_flight_number": "117",
                                "marketing_carrier": { "iata_code": "TP" }
                            }]
                        }]
                    }]
                }
            })))
            .mount(&server)
            .await;

        let provider = DuffelProvider::with_base_url("key", 5000, server.uri()).unwrap();
        let flights = provider.search_flights(&query()).await.unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].id, "duffel-tp-117");
        assert_eq!(flights[0].flight_number, "TP 117");
        assert_eq!(flights[0].duration, 10 * 3600 + 25 * 60);
        assert_eq!(flights[0].price, 84_219);
    }

    #[tokio::test]
    async fn skips_offers_without_segments() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/air/offer_requests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "offers": [
                        { "total_amount": "10.00", "slices": [] },
                        { "total_amount": "10.00", "slices": [{ "duration": "PT1H", "segments": [] }] }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let provider = DuffelProvider::with_base_url("key", 5000, server.uri()).unwrap();
        let flights = provider.search_flights(&query()).await.unwrap();
        assert!(flights.is_empty());
    }

    #[tokio::test]
    async fn upstream_error_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/air/offer_requests"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let provider = DuffelProvider::with_base_url("key", 5000, server.uri()).unwrap();
        let result = provider.search_flights(&query()).await;
        assert!(matches!(
            result,
            Err(ProviderError::UpstreamStatus { status: 500, .. })
        ));
    }
}
