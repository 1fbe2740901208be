//! # Provider Infrastructure
//!
//! The [`FlightProvider`] port and its adapters. Each adapter translates one
//! upstream provider's wire protocol into the shared [`Flight`] record:
//!
//! - [`AmadeusProvider`]: Amadeus flight-offers API (OAuth2 client
//!   credentials).
//! - [`DuffelProvider`]: Duffel offer-requests API.
//! - [`SerpProvider`]: SerpApi Google Flights engine.
//! - [`StubFlightProvider`]: deterministic synthetic flights for tests and
//!   local development.
//!
//! [`Flight`]: crate::domain::entities::Flight

pub mod amadeus;
pub mod duffel;
pub mod error;
pub mod http_client;
pub mod parse;
pub mod serp;
pub mod stub;
pub mod traits;

pub use amadeus::AmadeusProvider;
pub use duffel::DuffelProvider;
pub use error::{ProviderError, ProviderResult};
pub use http_client::HttpClient;
pub use serp::SerpProvider;
pub use stub::StubFlightProvider;
pub use traits::{FlightProvider, SearchQuery};
