//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete predicate implementations
//! that can be composed into a FilterPipeline.

pub mod actor;
pub mod genre;
pub mod language;
pub mod min_rating;
pub mod min_votes;
pub mod min_year;

// Re-export for convenience
pub use actor::ActorFilter;
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use min_rating::MinRatingFilter;
pub use min_votes::MinVotesFilter;
pub use min_year::MinYearFilter;
