//! # Provider Errors
//!
//! Error types for flight provider adapters.
//!
//! A provider error is always a partial failure from the engine's point of
//! view: it is logged and the provider's contribution is dropped for the
//! current search cycle, but it never fails the overall search on its own.
//!
//! # Examples
//!
//! ```
//! use flight_search::infrastructure::providers::ProviderError;
//!
//! let error = ProviderError::timeout("request exceeded 5000ms");
//! assert!(error.to_string().contains("timeout"));
//! ```

use thiserror::Error;

/// Error type for flight provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("provider authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("provider rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// Upstream returned a non-success status.
    #[error("provider returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// Payload could not be parsed into the expected shape.
    #[error("provider invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate-limit error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an upstream status error.
    #[must_use]
    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.into(),
        }
    }

    /// Creates an invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display() {
        let err = ProviderError::timeout("exceeded 5000ms");
        assert!(err.to_string().contains("timeout"));
        assert!(err.to_string().contains("exceeded 5000ms"));
    }

    #[test]
    fn upstream_status_display() {
        let err = ProviderError::upstream_status(502, "bad gateway");
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn authentication_display() {
        let err = ProviderError::authentication("invalid API key");
        assert!(err.to_string().contains("authentication"));
    }

    #[test]
    fn invalid_response_display() {
        let err = ProviderError::invalid_response("missing field `data`");
        assert!(err.to_string().contains("invalid response"));
    }
}
