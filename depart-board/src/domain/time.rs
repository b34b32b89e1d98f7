//! Time-of-day handling for the departure board.
//!
//! Navitia reports a departure's time as the `HHMMSS` half of a compound
//! `YYYYMMDDTHHMMSS` string. This module provides a type that carries that
//! time of day as milliseconds elapsed since the station-local midnight.
//! The value is an offset, not an instant: it has no date and no timezone
//! attached, and formatting derives hour and minute straight from the
//! millisecond count.

use std::fmt;

use chrono::{Locale, NaiveDate};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// A time of day, stored as milliseconds since local midnight.
///
/// # Examples
///
/// ```
/// use depart_board::domain::DepartureTime;
///
/// let time = DepartureTime::from_hms(14, 30, 5);
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(i64);

impl DepartureTime {
    /// Create from a raw millisecond offset.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create from hour, minute and second components.
    ///
    /// The components are combined without range validation; the decoder
    /// feeds in whatever integers it sliced out of the upstream string.
    pub const fn from_hms(hour: i64, minute: i64, second: i64) -> Self {
        Self((hour * 3600 + minute * 60 + second) * MILLIS_PER_SECOND)
    }

    /// The raw millisecond offset since midnight.
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// The hour component (not wrapped at 24).
    pub const fn hour(&self) -> i64 {
        self.0 / MILLIS_PER_HOUR
    }

    /// The minute component.
    pub const fn minute(&self) -> i64 {
        (self.0 / MILLIS_PER_MINUTE) % 60
    }
}

/// Displays as `H:MM`: hour unpadded, minute zero-padded.
impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

/// Format a calendar date as `dd MMMM yyyy` with French month names,
/// e.g. `19 janvier 2025`. Used for the trailing date line of the board.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format_localized("%d %B %Y", Locale::fr_FR).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_leading_zero_on_hour() {
        let time = DepartureTime::from_hms(9, 5, 0);
        assert_eq!(time.to_string(), "9:05");
    }

    #[test]
    fn display_zero_pads_minute() {
        let time = DepartureTime::from_hms(23, 0, 0);
        assert_eq!(time.to_string(), "23:00");
    }

    #[test]
    fn from_hms_millisecond_encoding() {
        let time = DepartureTime::from_hms(14, 30, 5);
        assert_eq!(time.millis(), ((14 * 3600) + (30 * 60) + 5) * 1000);
    }

    #[test]
    fn seconds_do_not_leak_into_display() {
        let time = DepartureTime::from_hms(8, 15, 59);
        assert_eq!(time.to_string(), "8:15");
    }

    #[test]
    fn midnight() {
        let time = DepartureTime::from_millis(0);
        assert_eq!(time.to_string(), "0:00");
    }

    #[test]
    fn date_line_in_french() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
        assert_eq!(format_date_long(date), "19 janvier 2025");
    }

    #[test]
    fn date_line_pads_day() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(format_date_long(date), "05 août 2025");
    }
}
