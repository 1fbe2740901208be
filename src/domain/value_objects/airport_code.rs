//! # Airport Code Value Object
//!
//! Validated IATA airport code.
//!
//! # Examples
//!
//! ```
//! use flight_search::domain::value_objects::AirportCode;
//!
//! let lax = AirportCode::new("lax").unwrap();
//! assert_eq!(lax.as_str(), "LAX");
//!
//! assert!(AirportCode::new("LAXX").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-letter IATA airport code.
///
/// # Invariants
///
/// - Exactly three ASCII alphabetic characters
/// - Stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Creates an airport code, uppercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAirportCode`] if the input is not
    /// exactly three ASCII letters.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidAirportCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for AirportCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
