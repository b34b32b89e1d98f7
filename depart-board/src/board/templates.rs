//! Askama template and view models for the board.

use askama::Template;

use crate::domain::{Departure, format_date_long};

use super::model::Model;

/// The single board page.
///
/// Three mutually exclusive branches, selected in the template: the error
/// banner, the empty-state message, or the departures table followed by
/// the trailing date line.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub error: Option<String>,
    pub rows: Vec<RowView>,
    /// Date line under the table, from the first departure's date. Kept
    /// optional even though the table branch implies a first element.
    pub date_line: Option<String>,
}

impl BoardTemplate {
    /// Build the view from the model.
    pub fn from_model(model: &Model) -> Self {
        let rows = model.departures.iter().map(RowView::from_departure).collect();

        let date_line = model
            .departures
            .first()
            .map(|d| format_date_long(d.departure_date));

        Self {
            error: model.error.clone(),
            rows,
            date_line,
        }
    }
}

/// One table row, everything pre-formatted for display.
#[derive(Debug, Clone)]
pub struct RowView {
    pub trip_short_name: String,
    pub direction: String,
    pub departure_time: String,
    pub physical_mode: String,
    pub commercial_mode: String,
}

impl RowView {
    /// Create from a domain Departure.
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            trip_short_name: departure.trip_short_name.clone(),
            direction: departure.direction.clone(),
            departure_time: departure.departure_time.to_string(),
            physical_mode: departure.physical_mode.clone(),
            commercial_mode: departure.commercial_mode.clone(),
        }
    }
}
