//! Core traits for the filtering pipeline.
//!
//! This module defines the RowFilter trait that allows composable,
//! extensible predicates to be applied to a set of dataset rows.

use anyhow::Result;
use data_loader::MovieDataset;

/// Core trait for narrowing a set of rows.
///
/// Filters operate on row indices into the shared dataset rather than on
/// cloned records, so each stage is a cheap retain over `usize`s.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used across concurrent sessions
/// - Filters take ownership of the `Vec<usize>` and return a narrowed Vec,
///   preserving the input (dataset) order
/// - A row the filter cannot evaluate (missing or uncoercible field) is
///   excluded, never an error; this mirrors the per-row skip policy of the
///   loader
pub trait RowFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of rows.
    ///
    /// # Arguments
    /// * `rows` - Indices into `dataset` still in play (takes ownership)
    /// * `dataset` - The shared, read-only movie table
    ///
    /// # Returns
    /// * `Ok(Vec<usize>)` - The surviving rows, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>>;
}
