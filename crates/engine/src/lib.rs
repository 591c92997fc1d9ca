//! # Engine Crate
//!
//! The movie query engine: given the in-memory dataset and a set of
//! user-supplied criteria, produce a bounded, title-sorted result for
//! display.
//!
//! ## Main Components
//!
//! - **criteria**: `FilterCriteria` value object with fail-fast validation
//! - **traits**: the `RowFilter` trait filters implement
//! - **filters**: one predicate per criterion
//! - **filter_pipeline**: chains filters, built from criteria
//! - **query**: sampling, sorting, and the `QueryEngine` entry points
//! - **result**: the ephemeral `ResultSet`
//! - **projection**: display column ordering
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{FilterCriteria, QueryEngine};
//!
//! let criteria = FilterCriteria::builder()
//!     .min_rating(7.5)
//!     .genre("Comedy")
//!     .build()?;
//!
//! let result = QueryEngine::query_projected(&dataset, &criteria, 100, None)?;
//! println!("{} movies match", result.len());
//! ```

// Public modules
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod projection;
pub mod query;
pub mod result;
pub mod traits;

// Re-export commonly used types for convenience
pub use criteria::{CriteriaError, FilterCriteria, FilterCriteriaBuilder};
pub use filter_pipeline::FilterPipeline;
pub use projection::project_columns;
pub use query::QueryEngine;
pub use result::ResultSet;
pub use traits::RowFilter;
