//! # Domain Errors
//!
//! Validation errors raised when constructing domain values.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Airport code is not exactly three ASCII letters.
    #[error("invalid airport code: {0}")]
    InvalidAirportCode(String),

    /// Unrecognized sort key.
    #[error("invalid sort key: {0}")]
    InvalidSortBy(String),

    /// Unrecognized sort direction.
    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
