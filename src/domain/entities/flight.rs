//! # Flight Entity
//!
//! The value record passed between every component of the aggregation
//! pipeline, and the [`SearchResult`] container returned to callers.
//!
//! A `Flight` is constructed fresh per search call from a provider response
//! and carries no identity across searches. Prices are integer minor
//! currency units (cents), converted once at ingestion; durations are whole
//! seconds.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single flight offer returned by an upstream provider.
///
/// # Invariants
///
/// - `price` and `duration` are non-negative
/// - At most one flight in a result set has `is_cheapest = true`, at most
///   one has `is_fastest = true` (enforced by the annotator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Opaque provider-namespaced identifier (e.g. `duffel-ba-117`).
    /// Unique per provider call, not globally deduplicated.
    pub id: String,
    /// Human-facing carrier code plus number, e.g. `BA 117`.
    pub flight_number: String,
    /// Three-letter origin airport code.
    pub origin: String,
    /// Three-letter destination airport code.
    pub destination: String,
    /// Departure time with the local timezone offset.
    pub departure_at: DateTime<FixedOffset>,
    /// Arrival time with the local timezone offset.
    pub arrival_at: DateTime<FixedOffset>,
    /// Total flight duration in whole seconds, provider-sourced or derived
    /// from `arrival_at - departure_at`.
    pub duration: i64,
    /// Total price in minor currency units (cents). Never floating point.
    pub price: i64,
    /// Set by the annotator on the single cheapest flight of a result set.
    #[serde(default)]
    pub is_cheapest: bool,
    /// Set by the annotator on the single fastest flight of a result set.
    #[serde(default)]
    pub is_fastest: bool,
}

impl Flight {
    /// Duration in whole seconds between two timestamps, clamped to zero.
    ///
    /// Used by adapters whose payloads carry no explicit duration.
    #[must_use]
    pub fn duration_between(
        departure_at: &DateTime<FixedOffset>,
        arrival_at: &DateTime<FixedOffset>,
    ) -> i64 {
        (*arrival_at - *departure_at).num_seconds().max(0)
    }
}

/// Ordered, annotated flight list returned by a successful search.
///
/// Never empty: an empty aggregation surfaces as a not-found error instead.
/// This is also the payload serialized into the cache, so it must round-trip
/// every [`Flight`] field including the annotation flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Flights in ranked order.
    pub data: Vec<Flight>,
}

impl SearchResult {
    /// Wraps a flight list.
    #[must_use]
    pub fn new(data: Vec<Flight>) -> Self {
        Self { data }
    }

    /// Number of flights in the result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the result holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
