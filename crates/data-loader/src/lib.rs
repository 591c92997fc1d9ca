//! # Data Loader Crate
//!
//! This crate handles acquiring and parsing the movie dataset used by the
//! dashboard.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, MovieDataset)
//! - **parser**: Quote-aware CSV parsing with per-row skip on coercion failure
//! - **fetch**: One-shot HTTP download of the remote CSV
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::parser;
//! use std::path::Path;
//!
//! // Load the dataset from a local file
//! let dataset = parser::load_from_path(Path::new("data/IMDb_movies.csv"))?;
//!
//! println!("Loaded {} movies", dataset.len());
//! ```
//!
//! The dataset is loaded once per session and treated as read-only from
//! then on; share it across sessions behind an `Arc`.

// Public modules
pub mod error;
pub mod fetch;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{MovieDataset, MovieRecord, PRIORITY_COLUMNS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_creation() {
        let dataset = MovieDataset::new();

        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.get(0).is_none());
    }

    #[test]
    fn test_priority_columns_order() {
        // The display surface relies on this exact order.
        assert_eq!(
            PRIORITY_COLUMNS,
            ["title", "year", "genre", "avg_vote", "votes", "language", "duration", "actors"]
        );
    }
}
