//! Column projection for display.
//!
//! A pure presentation-ordering transform: the engine's known columns come
//! first in a fixed priority order, every other column follows in its
//! original relative order. No column is added or dropped and rows are
//! untouched.

use crate::result::ResultSet;
use data_loader::PRIORITY_COLUMNS;

/// Reorder `columns` so priority columns lead.
///
/// Priority columns absent from the input are simply not emitted, so the
/// output is always a permutation of the input.
pub fn project_columns(columns: &[String]) -> Vec<String> {
    let mut projected: Vec<String> = PRIORITY_COLUMNS
        .iter()
        .filter(|priority| columns.iter().any(|c| c == *priority))
        .map(|s| s.to_string())
        .collect();
    projected.extend(
        columns
            .iter()
            .filter(|c| !PRIORITY_COLUMNS.contains(&c.as_str()))
            .cloned(),
    );
    projected
}

impl ResultSet {
    /// Apply the display projection to this result's column order.
    pub fn with_priority_columns(mut self) -> Self {
        self.columns = project_columns(&self.columns);
        self
    }
}
