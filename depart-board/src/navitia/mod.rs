//! Navitia departures client.
//!
//! This module provides the HTTP client and decoding layer for the
//! Navitia transit API, which reports scheduled departures per stop area.
//!
//! Key characteristics of the feed:
//! - Departure times come as a compound `YYYYMMDDTHHMMSS` string with no
//!   timezone offset; date and time are split apart during conversion
//! - The response order is the display order; nothing is re-sorted
//! - Decoding is all-or-nothing: one malformed item fails the response

mod client;
mod convert;
mod error;
mod types;

pub use client::{NavitiaClient, NavitiaConfig};
pub use convert::{ConversionError, convert_departure_item, decode_departures};
pub use error::NavitiaError;
pub use types::{DepartureItem, DeparturesResponse, DisplayInformations, StopDateTime};
