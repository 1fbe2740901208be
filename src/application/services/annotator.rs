//! # Annotator
//!
//! Marks exactly one flight as cheapest and exactly one as fastest across a
//! merged result set.
//!
//! Single linear pass tracking the running minimum by price and by duration.
//! Ties keep the first flight encountered in input order; because the
//! fan-out merges provider buffers in registration order, that tie-break is
//! deterministic across runs.

use crate::domain::entities::Flight;

/// Sets `is_cheapest` on the first minimum-price flight and `is_fastest` on
/// the first minimum-duration flight. A no-op on an empty slice. The two
/// flags may land on the same flight.
pub fn annotate(flights: &mut [Flight]) {
    let mut cheapest: Option<(usize, i64)> = None;
    let mut fastest: Option<(usize, i64)> = None;

    for (i, flight) in flights.iter().enumerate() {
        if cheapest.is_none_or(|(_, price)| flight.price < price) {
            cheapest = Some((i, flight.price));
        }
        if fastest.is_none_or(|(_, duration)| flight.duration < duration) {
            fastest = Some((i, flight.duration));
        }
    }

    if let Some(flight) = cheapest.and_then(|(i, _)| flights.get_mut(i)) {
        flight.is_cheapest = true;
    }
    if let Some(flight) = fastest.and_then(|(i, _)| flights.get_mut(i)) {
        flight.is_fastest = true;
    }
}
