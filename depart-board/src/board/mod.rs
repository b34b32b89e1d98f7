//! Board state and rendering.

mod model;
mod templates;

pub use model::Model;
pub use templates::{BoardTemplate, RowView};
