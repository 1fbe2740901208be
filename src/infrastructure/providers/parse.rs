//! # Provider Payload Parsing
//!
//! Shared helpers for converting upstream wire values into the units used by
//! the [`Flight`](crate::domain::entities::Flight) record: timestamps with
//! offsets, ISO-8601 durations, and decimal amounts to minor currency units.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a provider timestamp into a [`DateTime<FixedOffset>`].
///
/// Accepts RFC 3339 (`2026-09-01T09:00:00-08:00`) and the offset-less local
/// forms some providers emit (`2026-09-01T09:00:00`, `2026-09-01 09:00`),
/// which are taken at face value with a zero offset.
#[must_use]
pub fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }
    None
}

/// Parses an ISO-8601 duration of the `PT#H#M#S` form into whole seconds.
///
/// Day components (`P1DT2H`) are supported since long-haul offers use them.
/// Returns `None` for anything else (negative, week-based, or malformed).
#[must_use]
pub fn parse_iso8601_duration(value: &str) -> Option<i64> {
    let rest = value.strip_prefix('P')?;
    let (day_part, time_part) = match rest.split_once('T') {
        Some((d, t)) => (d, t),
        None => (rest, ""),
    };

    let mut total: i64 = 0;

    if !day_part.is_empty() {
        let days = day_part.strip_suffix('D')?;
        total += days.parse::<i64>().ok()?.checked_mul(86_400)?;
    }

    let mut number = String::new();
    for c in time_part.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        let unit: i64 = match c {
            'H' => 3600,
            'M' => 60,
            'S' => 1,
            _ => return None,
        };
        let n: i64 = number.parse().ok()?;
        total = total.checked_add(n.checked_mul(unit)?)?;
        number.clear();
    }

    if !number.is_empty() {
        return None;
    }
    Some(total)
}

/// Converts a decimal amount string (e.g. `"123.45"`) to minor currency
/// units, truncating below one cent.
#[must_use]
pub fn decimal_to_minor_units(value: &str) -> Option<i64> {
    let amount = Decimal::from_str(value.trim()).ok()?;
    let cents = amount.checked_mul(Decimal::ONE_HUNDRED)?.trunc();
    cents.to_i64().filter(|c| *c >= 0)
}

/// Converts a float amount to minor currency units, truncating below one
/// cent. Used for providers that put prices on the wire as JSON numbers.
#[must_use]
pub fn f64_to_minor_units(value: f64) -> Option<i64> {
    let amount = Decimal::from_f64_retain(value)?;
    let cents = amount.checked_mul(Decimal::ONE_HUNDRED)?.trunc();
    cents.to_i64().filter(|c| *c >= 0)
}
