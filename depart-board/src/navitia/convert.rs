//! Conversion from Navitia DTOs to domain types.
//!
//! The interesting part is the compound `YYYYMMDDTHHMMSS` timestamp: the
//! date half goes through a real date parser, while the time half is read
//! by fixed-offset slicing with a default of zero for any slice that is
//! not an integer. A single bad item aborts the whole response; there is
//! no partial-success mode.

use chrono::NaiveDate;

use crate::domain::{Departure, DepartureTime};

use super::types::{DepartureItem, DeparturesResponse};

/// Error during response decoding or DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// The response body was not the expected JSON shape
    #[error("unexpected response shape: {0}")]
    Json(String),

    /// The compound timestamp did not split into date and time halves
    #[error("expected a separator in departure_date_time, got: {0}")]
    MissingSeparator(String),

    /// The date half of the compound timestamp did not parse
    #[error("invalid departure date: {0}")]
    InvalidDate(String),
}

/// Decode a departures response body into domain departures.
///
/// Preserves the response order. Any failure (wrong JSON shape, missing
/// field, bad compound timestamp) fails the whole decode.
pub fn decode_departures(body: &str) -> Result<Vec<Departure>, ConversionError> {
    let response: DeparturesResponse =
        serde_json::from_str(body).map_err(|e| ConversionError::Json(e.to_string()))?;

    response
        .departures
        .iter()
        .map(convert_departure_item)
        .collect()
}

/// Convert a single departure item to a domain `Departure`.
pub fn convert_departure_item(item: &DepartureItem) -> Result<Departure, ConversionError> {
    let compound = &item.stop_date_time.departure_date_time;
    let (date_part, time_part) = split_compound(compound)?;

    let departure_date = parse_date(date_part)?;
    let departure_time = parse_time_of_day(time_part);

    Ok(Departure {
        direction: item.display_informations.direction.clone(),
        departure_date,
        departure_time,
        trip_short_name: item.display_informations.trip_short_name.clone(),
        physical_mode: item.display_informations.physical_mode.clone(),
        commercial_mode: item.display_informations.commercial_mode.clone(),
    })
}

/// Split the compound timestamp on its `T` separator.
///
/// Requires exactly one separator: zero or several `T`s both fail, rather
/// than splitting lazily on the first one.
fn split_compound(compound: &str) -> Result<(&str, &str), ConversionError> {
    let parts: Vec<&str> = compound.split('T').collect();
    match parts.as_slice() {
        [date, time] => Ok((date, time)),
        _ => Err(ConversionError::MissingSeparator(compound.to_string())),
    }
}

/// Parse the date half, ISO 8601 basic format (`YYYYMMDD`).
///
/// The extended form (`YYYY-MM-DD`) is also accepted, matching the lenient
/// parser the upstream feed was originally consumed with.
fn parse_date(date_part: &str) -> Result<NaiveDate, ConversionError> {
    NaiveDate::parse_from_str(date_part, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y-%m-%d"))
        .map_err(|_| ConversionError::InvalidDate(date_part.to_string()))
}

/// Read hour, minute and second out of the `HHMMSS` half.
///
/// Hour is chars [0,2), minute chars [2,4), and second the LAST two chars
/// of the string, not chars [4,6). For well-formed six-character input the
/// two coincide; for short input they diverge, and that divergence is kept
/// as-is. A slice that does not parse as an integer contributes 0.
fn parse_time_of_day(time_part: &str) -> DepartureTime {
    let hour = int_slice(time_part, 0, 2);
    let minute = int_slice(time_part, 2, 4);
    let second = int_slice(time_part, time_part.len().saturating_sub(2), time_part.len());

    DepartureTime::from_hms(hour, minute, second)
}

/// Parse the characters in `[start, end)` as an integer, defaulting to 0.
///
/// The end of the range is clamped to the string length, so a short input
/// yields a short (or empty) slice rather than an out-of-bounds error.
fn int_slice(s: &str, start: usize, end: usize) -> i64 {
    let end = end.min(s.len());
    if start >= end {
        return 0;
    }
    s.get(start..end)
        .and_then(|slice| slice.parse::<i64>().ok())
        .unwrap_or(0)
}
