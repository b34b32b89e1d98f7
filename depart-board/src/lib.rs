//! Station departure board.
//!
//! Fetches upcoming train departures for a single station from the
//! Navitia transit API and renders them as an HTML departure board:
//! one request at startup, one state transition, one page.

pub mod board;
pub mod domain;
pub mod navitia;
