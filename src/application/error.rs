//! # Application Errors
//!
//! Error taxonomy for search execution.
//!
//! Only two conditions propagate to callers as failures: `NotFound` (the
//! fan-out produced zero flights) and validation errors. Individual provider
//! failures and cache failures are absorbed internally — logged, never
//! surfaced — as long as at least one flight was obtained.

use crate::domain::errors::DomainError;
use crate::infrastructure::cache::CacheError;
use crate::infrastructure::providers::ProviderError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No flight was found across all providers for the requested route and
    /// date. The definitive outcome of an empty aggregation, never retried.
    #[error("no flight was found for this origin and destination in the given date")]
    NotFound,

    /// Malformed input reached the use case.
    #[error("validation error: {0}")]
    Validation(String),

    /// Domain value construction failed.
    #[error("validation error: {0}")]
    Domain(#[from] DomainError),

    /// Cache failure that must propagate (construction/wiring only; search
    /// path cache failures are absorbed fail-open).
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Provider failure that must propagate (construction/wiring only;
    /// search path provider failures are partial failures).
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this is the not-found outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = ApplicationError::NotFound;
        assert!(err.to_string().contains("no flight was found"));
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_display() {
        let err = ApplicationError::validation("origin is required");
        assert!(err.to_string().contains("origin is required"));
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn domain_errors_count_as_validation() {
        let err: ApplicationError = DomainError::InvalidAirportCode("XXXX".to_string()).into();
        assert!(err.is_validation());
    }

    #[test]
    fn cache_errors_wrap() {
        let err: ApplicationError = CacheError::connection("refused").into();
        assert!(err.to_string().contains("cache"));
    }
}
