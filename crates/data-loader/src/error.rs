//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while acquiring or parsing the movie dataset.
///
/// Row-level problems (a non-numeric vote count, a field-count mismatch)
/// are deliberately NOT represented here: the loader skips those rows and
/// logs them. Only whole-load failures surface as errors.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The dataset could not be fetched from its remote source
    #[error("Dataset source unavailable at {url}: {reason}")]
    SourceUnavailable { url: String, reason: String },

    /// I/O error occurred while reading a local file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input had no header row
    #[error("Dataset is missing a header row")]
    MissingHeader,

    /// A column the engine requires was absent from the header
    #[error("Required column '{column}' not found in header")]
    MissingColumn { column: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
