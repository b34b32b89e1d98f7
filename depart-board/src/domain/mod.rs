//! Domain types for the departure board.
//!
//! These are the values the renderer consumes: the `Departure` record and
//! the midnight-offset `DepartureTime`. Conversion from the raw Navitia
//! response lives in `crate::navitia::convert`.

mod departure;
mod time;

pub use departure::Departure;
pub use time::{DepartureTime, format_date_long};
