//! # Sort Value Objects
//!
//! Caller-selected ranking key and direction.
//!
//! Both enums are part of the cache key, so their wire tokens are fixed:
//! `price` / `duration` / `departure` and `asc` / `desc`.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking key for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order by price in minor currency units.
    #[default]
    Price,
    /// Order by total flight duration.
    Duration,
    /// Order by departure time.
    Departure,
}

impl SortBy {
    /// Returns the wire token for this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Duration => "duration",
            Self::Departure => "departure",
        }
    }

    /// Parses an optional token, defaulting to [`SortBy::Price`] when absent
    /// or empty.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSortBy`] for an unrecognized token.
    pub fn parse_or_default(token: Option<&str>) -> DomainResult<Self> {
        match token {
            None | Some("") => Ok(Self::default()),
            Some(t) => t.parse(),
        }
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "duration" => Ok(Self::Duration),
            "departure" => Ok(Self::Departure),
            other => Err(DomainError::InvalidSortBy(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ranking direction for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the wire token for this direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parses an optional token, defaulting to [`SortOrder::Asc`] when
    /// absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSortOrder`] for an unrecognized token.
    pub fn parse_or_default(token: Option<&str>) -> DomainResult<Self> {
        match token {
            None | Some("") => Ok(Self::default()),
            Some(t) => t.parse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_parses_known_tokens() {
        assert_eq!("price".parse::<SortBy>().unwrap(), SortBy::Price);
        assert_eq!("duration".parse::<SortBy>().unwrap(), SortBy::Duration);
        assert_eq!("departure".parse::<SortBy>().unwrap(), SortBy::Departure);
    }

    #[test]
    fn sort_by_rejects_unknown_token() {
        assert!("airline".parse::<SortBy>().is_err());
    }

    #[test]
    fn sort_by_defaults_to_price() {
        assert_eq!(SortBy::parse_or_default(None).unwrap(), SortBy::Price);
        assert_eq!(SortBy::parse_or_default(Some("")).unwrap(), SortBy::Price);
    }

    #[test]
    fn sort_order_parses_known_tokens() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn sort_order_defaults_to_asc() {
        assert_eq!(SortOrder::parse_or_default(None).unwrap(), SortOrder::Asc);
        assert!(SortOrder::parse_or_default(Some("down")).is_err());
    }

    #[test]
    fn wire_tokens_are_stable() {
        // These tokens participate in cache keys.
        assert_eq!(SortBy::Departure.to_string(), "departure");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        assert_eq!(serde_json::to_string(&SortBy::Price).unwrap(), "\"price\"");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    }
}
