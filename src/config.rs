//! # Process Configuration
//!
//! Typed configuration loaded from `FLIGHT_`-prefixed environment variables
//! (with `.env` support) and validated once at startup. The configuration is
//! an explicit value passed into whichever layer wires up the engine — no
//! component reads ambient global state directly.
//!
//! Development and test environments wire the deterministic stub provider
//! and the in-memory cache; staging and production require Redis plus real
//! provider credentials.

use crate::application::services::AggregationConfig;
use crate::infrastructure::cache::{CacheResult, FlightCache, InMemoryFlightCache, RedisFlightCache};
use crate::infrastructure::providers::{
    AmadeusProvider, DuffelProvider, FlightProvider, ProviderResult, SerpProvider,
    StubFlightProvider,
};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The underlying source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required setting is missing or inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: stub provider, in-memory cache.
    #[default]
    Development,
    /// Staging: real providers and Redis.
    Staging,
    /// Production: real providers and Redis.
    Production,
    /// Test runs: stub provider, in-memory cache.
    Test,
}

impl Environment {
    /// Returns true for environments wired against real collaborators.
    #[must_use]
    pub fn uses_real_providers(self) -> bool {
        matches!(self, Self::Staging | Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Test => "test",
        };
        write!(f, "{name}")
    }
}

/// Process configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment.
    #[serde(default)]
    pub environment: Environment,
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    /// Per-request timeout applied inside every provider HTTP client.
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,
    /// TTL for cached search results, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Amadeus OAuth2 client id.
    #[serde(default)]
    pub amadeus_api_key: Option<String>,
    /// Amadeus OAuth2 client secret.
    #[serde(default)]
    pub amadeus_api_secret: Option<String>,
    /// Duffel API key.
    #[serde(default)]
    pub duffel_api_key: Option<String>,
    /// SerpApi API key.
    #[serde(default)]
    pub serp_api_key: Option<String>,
}

fn default_redis_url() -> String {
    "redis://localhost:6379/0".to_string()
}

fn default_provider_timeout_ms() -> u64 {
    5000
}

fn default_cache_ttl_secs() -> u64 {
    30
}

impl AppConfig {
    /// Loads configuration from the process environment, honoring a local
    /// `.env` file when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable cannot be deserialized or a
    /// required credential is missing for the selected environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("FLIGHT"))
            .build()?;
        let app_config: Self = settings.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Validates environment-dependent requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a real-provider environment is
    /// missing credentials.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.environment.uses_real_providers() {
            return Ok(());
        }
        for (name, value) in [
            ("FLIGHT_AMADEUS_API_KEY", &self.amadeus_api_key),
            ("FLIGHT_AMADEUS_API_SECRET", &self.amadeus_api_secret),
            ("FLIGHT_DUFFEL_API_KEY", &self.duffel_api_key),
            ("FLIGHT_SERP_API_KEY", &self.serp_api_key),
        ] {
            if value.as_deref().unwrap_or("").is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "{name} is required in the {} environment",
                    self.environment
                )));
            }
        }
        Ok(())
    }

    /// Builds the provider set for this environment, in the registration
    /// order that also fixes the merge order of the fan-out.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`](crate::infrastructure::providers::ProviderError)
    /// if an adapter's HTTP client cannot be constructed.
    pub fn providers(&self) -> ProviderResult<Vec<Arc<dyn FlightProvider>>> {
        if !self.environment.uses_real_providers() {
            return Ok(vec![Arc::new(StubFlightProvider::new())]);
        }

        let amadeus = AmadeusProvider::new(
            self.amadeus_api_key.clone().unwrap_or_default(),
            self.amadeus_api_secret.clone().unwrap_or_default(),
            self.provider_timeout_ms,
        )?;
        let serp = SerpProvider::new(
            self.serp_api_key.clone().unwrap_or_default(),
            self.provider_timeout_ms,
        )?;
        let duffel = DuffelProvider::new(
            self.duffel_api_key.as_deref().unwrap_or_default(),
            self.provider_timeout_ms,
        )?;

        Ok(vec![Arc::new(amadeus), Arc::new(serp), Arc::new(duffel)])
    }

    /// Builds the engine configuration, carrying the configured cache TTL.
    #[must_use]
    pub fn aggregation_config(&self) -> AggregationConfig {
        AggregationConfig::default().with_cache_ttl(Duration::from_secs(self.cache_ttl_secs))
    }

    /// Connects the cache backend for this environment.
    ///
    /// # Errors
    ///
    /// Returns a [`CacheError`](crate::infrastructure::cache::CacheError)
    /// if the Redis connection cannot be established.
    pub async fn connect_cache(&self) -> CacheResult<Arc<dyn FlightCache>> {
        if self.environment.uses_real_providers() {
            let cache = RedisFlightCache::connect(&self.redis_url).await?;
            Ok(Arc::new(cache))
        } else {
            Ok(Arc::new(InMemoryFlightCache::new()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            environment: Environment::Development,
            redis_url: default_redis_url(),
            provider_timeout_ms: default_provider_timeout_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
            amadeus_api_key: None,
            amadeus_api_secret: None,
            duffel_api_key: None,
            serp_api_key: None,
        }
    }

    #[test]
    fn development_needs_no_credentials() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn production_requires_credentials() {
        let mut config = base_config();
        config.environment = Environment::Production;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("FLIGHT_AMADEUS_API_KEY"));
    }

    #[test]
    fn production_with_credentials_is_valid() {
        let config = AppConfig {
            environment: Environment::Production,
            amadeus_api_key: Some("k".to_string()),
            amadeus_api_secret: Some("s".to_string()),
            duffel_api_key: Some("d".to_string()),
            serp_api_key: Some("p".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn development_wires_the_stub_provider() {
        let providers = base_config().providers().unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].provider_id().as_str(), "stub");
    }

    #[test]
    fn production_wires_all_real_providers() {
        let config = AppConfig {
            environment: Environment::Production,
            amadeus_api_key: Some("k".to_string()),
            amadeus_api_secret: Some("s".to_string()),
            duffel_api_key: Some("d".to_string()),
            serp_api_key: Some("p".to_string()),
            ..base_config()
        };
        let providers = config.providers().unwrap();
        let ids: Vec<&str> = providers.iter().map(|p| p.provider_id().as_str()).collect();
        assert_eq!(ids, ["amadeus", "serp", "duffel"]);
    }

    #[tokio::test]
    async fn configured_ttl_reaches_the_engine() {
        let mut config = base_config();
        config.cache_ttl_secs = 90;
        let engine = crate::application::services::FlightAggregationEngine::new(
            config.providers().unwrap(),
            config.connect_cache().await.unwrap(),
            config.aggregation_config(),
        );
        assert_eq!(engine.config().cache_ttl, Duration::from_secs(90));
    }

    #[tokio::test]
    async fn development_uses_in_memory_cache() {
        let cache = base_config().connect_cache().await.unwrap();
        cache
            .set("k", "v", std::time::Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(cache.scan("k").await.unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn environment_display_tokens() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
        assert!(Environment::Production.uses_real_providers());
        assert!(!Environment::Test.uses_real_providers());
    }
}
