//! # Providers Crate
//!
//! Abstraction over where filtering is actually performed.
//!
//! ## Components
//!
//! ### LocalFilterProvider
//! Runs the query engine directly over the in-memory dataset: predicate
//! narrowing, bounded sampling, title sort.
//!
//! ### RemoteFilterProvider
//! Delegates filtering to the remote analysis service and performs no
//! local predicate evaluation; locally it only coerces rows and applies
//! the display column projection.
//!
//! The two implementations are interchangeable behind the `DataProvider`
//! trait, selected at configuration time by the session layer. Sessions
//! share one provider; each holds its own criteria and result.

use async_trait::async_trait;
use engine::{FilterCriteria, ResultSet};
use thiserror::Error;

pub mod local;
pub mod remote;

// Re-export for convenience
pub use local::LocalFilterProvider;
pub use remote::RemoteFilterProvider;

/// Errors a provider can surface to the session layer.
///
/// Row-level coercion problems never appear here; both providers absorb
/// them. A provider either produces a full result or a single failure.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The dataset or remote service could not be reached
    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    /// The query itself failed (invalid cap, task failure)
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Capability interface over a filtering backend.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Returns the name of this provider (for logging/debugging)
    fn name(&self) -> &str;

    /// Execute one search and return the projected result.
    ///
    /// # Arguments
    /// * `criteria` - Validated filter criteria
    /// * `sample_cap` - Maximum rows to return (local filtering only)
    /// * `seed` - Sampling seed; `None` draws a fresh one per call
    async fn fetch(
        &self,
        criteria: &FilterCriteria,
        sample_cap: usize,
        seed: Option<u64>,
    ) -> Result<ResultSet, ProviderError>;

    /// The column layout this provider displays, used to shape the empty
    /// "no data" result when a fetch fails.
    fn columns(&self) -> Vec<String>;
}
