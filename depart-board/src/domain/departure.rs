//! The departure record displayed on the board.

use chrono::NaiveDate;

use super::DepartureTime;

/// One scheduled train leaving the monitored station.
///
/// Built by the Navitia conversion layer; the response order is preserved
/// all the way to the rendered table, so no ordering invariant lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Destination or direction label, free text.
    pub direction: String,

    /// Service-local date portion of the scheduled departure.
    pub departure_date: NaiveDate,

    /// Time of day of the scheduled departure.
    pub departure_time: DepartureTime,

    /// Short train identifier (e.g. "6607").
    pub trip_short_name: String,

    /// Physical mode label (vehicle type, e.g. "Train grande vitesse").
    pub physical_mode: String,

    /// Commercial mode label (marketed brand, e.g. "TGV INOUI").
    pub commercial_mode: String,
}
