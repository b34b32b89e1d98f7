//! Application state for the board.

use crate::domain::Departure;
use crate::navitia::NavitiaError;

/// The board's state: a list of departures and an optional error.
///
/// Created empty, then mutated exactly once by the result of the single
/// fetch. Exactly one of error-set / empty / non-empty holds at a time,
/// and the renderer branches on those three cases in that order.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Departures in API response order.
    pub departures: Vec<Departure>,

    /// Display text of the fetch failure, if any.
    pub error: Option<String>,
}

impl Model {
    /// The state before the fetch resolves: no departures, no error.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Apply the fetch result. This is the only transition the board has;
    /// both outcomes are terminal for the run.
    pub fn resolve(self, result: Result<Vec<Departure>, NavitiaError>) -> Self {
        match result {
            Ok(departures) => Self {
                departures,
                error: None,
            },
            Err(e) => Self {
                departures: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}
