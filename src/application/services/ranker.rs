//! # Ranker
//!
//! Stable ordering of a merged result set by a caller-selected key and
//! direction.
//!
//! Stability matters: the annotator has already flagged the first-in-input
//! minimum for cheapest/fastest, and a non-stable sort could reorder a
//! flagged flight away from its position among equal keys.

use crate::domain::entities::Flight;
use crate::domain::value_objects::{SortBy, SortOrder};
use std::cmp::Ordering;

/// Sorts flights in place by the given key and direction.
///
/// `Vec::sort_by` is a stable sort, so flights comparing equal under the
/// chosen key retain their relative input order in both directions.
pub fn sort_flights(flights: &mut [Flight], sort_by: SortBy, sort_order: SortOrder) {
    flights.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Flight, b: &Flight, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Duration => a.duration.cmp(&b.duration),
        SortBy::Departure => a.departure_at.cmp(&b.departure_at),
        SortBy::Price => a.price.cmp(&b.price),
    }
}
