//! # Flight Aggregation Engine
//!
//! Orchestrates one search call end to end: cache-aside lookup, concurrent
//! fan-out to every configured provider, merge with partial-failure
//! tolerance, annotation, stable ranking, and best-effort cache write-back.
//!
//! The fan-out runs all provider calls concurrently inside the caller's task
//! via [`join_all`], so dropping the search future (caller disconnect,
//! deadline) cancels every in-flight provider call without leaking tasks.
//! Each call accumulates into its own future's output; results are merged in
//! provider registration order only after all calls complete, which keeps
//! the merge race-free and the annotator's first-encountered tie-break
//! deterministic.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::annotator::annotate;
use crate::application::services::ranker::sort_flights;
use crate::domain::entities::{Flight, SearchResult};
use crate::domain::value_objects::{SortBy, SortOrder};
use crate::infrastructure::cache::FlightCache;
use crate::infrastructure::providers::{FlightProvider, SearchQuery};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the aggregation engine.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// How long a merged result stays in the cache.
    pub cache_ttl: Duration,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(30),
        }
    }
}

impl AggregationConfig {
    /// Overrides the cache TTL.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// Outcome counters for one fan-out, logged per search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutStats {
    /// Number of providers queried.
    pub providers_queried: usize,
    /// Number of providers that returned a result (possibly empty).
    pub providers_responded: usize,
    /// Number of providers that failed this cycle.
    pub providers_failed: usize,
    /// Total flights collected across all providers.
    pub flights_collected: usize,
}

/// Engine for collecting, annotating, and ranking flights from multiple
/// providers behind a shared cache.
#[derive(Debug)]
pub struct FlightAggregationEngine {
    providers: Vec<Arc<dyn FlightProvider>>,
    cache: Arc<dyn FlightCache>,
    config: AggregationConfig,
}

impl FlightAggregationEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(
        providers: Vec<Arc<dyn FlightProvider>>,
        cache: Arc<dyn FlightCache>,
        config: AggregationConfig,
    ) -> Self {
        Self {
            providers,
            cache,
            config,
        }
    }

    /// Creates a new engine with the default 30-second cache TTL.
    #[must_use]
    pub fn with_defaults(
        providers: Vec<Arc<dyn FlightProvider>>,
        cache: Arc<dyn FlightCache>,
    ) -> Self {
        Self::new(providers, cache, AggregationConfig::default())
    }

    /// Executes one search: cache lookup, fan-out on miss, annotate, sort,
    /// write back.
    ///
    /// Inputs are assumed already validated by the use case layer.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] when the merged set is empty —
    /// every provider failed or returned zero flights. Cache failures never
    /// fail the search: a read error degrades to a miss and a write error is
    /// logged while the freshly computed result is still returned.
    pub async fn search(
        &self,
        query: &SearchQuery,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> ApplicationResult<SearchResult> {
        let key = cache_key(query, sort_by, sort_order);

        if let Some(cached) = self.cache_lookup(&key).await {
            debug!(key = %key, flights = cached.len(), "cache hit");
            return Ok(cached);
        }

        let (mut flights, stats) = self.fan_out(query).await;
        debug!(
            key = %key,
            queried = stats.providers_queried,
            responded = stats.providers_responded,
            failed = stats.providers_failed,
            collected = stats.flights_collected,
            "provider fan-out complete"
        );

        if flights.is_empty() {
            return Err(ApplicationError::NotFound);
        }

        annotate(&mut flights);
        sort_flights(&mut flights, sort_by, sort_order);
        let result = SearchResult::new(flights);

        self.cache_store(&key, &result).await;
        Ok(result)
    }

    /// Fail-open cache read: any error or undecodable payload is a miss.
    async fn cache_lookup(&self, key: &str) -> Option<SearchResult> {
        let payload = match self.cache.scan(key).await {
            Ok(found) => found?,
            Err(error) => {
                warn!(key = %key, %error, "cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(result) => Some(result),
            Err(error) => {
                warn!(key = %key, %error, "undecodable cache payload, treating as miss");
                None
            }
        }
    }

    /// Best-effort cache write: errors are logged and swallowed.
    async fn cache_store(&self, key: &str, result: &SearchResult) {
        let payload = match serde_json::to_string(result) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(key = %key, %error, "failed to serialize result for cache");
                return;
            }
        };
        if let Err(error) = self.cache.set(key, &payload, self.config.cache_ttl).await {
            warn!(key = %key, %error, "cache write failed");
        }
    }

    /// Invokes every provider concurrently and merges their buffers in
    /// registration order once all calls have finished.
    async fn fan_out(&self, query: &SearchQuery) -> (Vec<Flight>, FanOutStats) {
        let calls = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            async move {
                let outcome = provider.search_flights(query).await;
                (provider.provider_id().clone(), outcome)
            }
        });

        let outcomes = join_all(calls).await;

        let mut flights = Vec::new();
        let mut responded = 0_usize;
        let mut failed = 0_usize;
        for (provider_id, outcome) in outcomes {
            match outcome {
                Ok(batch) => {
                    responded += 1;
                    flights.extend(batch);
                }
                Err(error) => {
                    failed += 1;
                    warn!(provider = %provider_id, %error, "provider search failed");
                }
            }
        }

        let stats = FanOutStats {
            providers_queried: self.providers.len(),
            providers_responded: responded,
            providers_failed: failed,
            flights_collected: flights.len(),
        };
        (flights, stats)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }
}

/// Deterministic cache key: ordered concatenation of the effective search
/// parameters joined by `_`, which appears in none of the fields. Identical
/// effective parameters collide intentionally.
fn cache_key(query: &SearchQuery, sort_by: SortBy, sort_order: SortOrder) -> String {
    format!(
        "{}_{}_{}_{}_{}",
        query.origin,
        query.destination,
        query.date.format("%Y-%m-%d"),
        sort_by,
        sort_order
    )
}
