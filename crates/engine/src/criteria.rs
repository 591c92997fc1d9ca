//! User-chosen filter constraints.
//!
//! `FilterCriteria` is a plain value object: the session layer owns one per
//! user, updates it on each interaction, and passes it by value into the
//! stateless query path. It also serializes directly as the wire payload
//! sent to the remote analysis service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The sentinel a UI select box uses for "no preference".
const ANY: &str = "any";

/// Criteria values outside their declared domains are rejected when the
/// criteria are built, never propagated silently into filtering.
#[derive(Error, Debug, PartialEq)]
pub enum CriteriaError {
    #[error("Minimum rating {value} is outside the valid range [0.0, 10.0]")]
    RatingOutOfRange { value: f64 },

    #[error("Minimum year {value} must not be negative")]
    NegativeMinYear { value: i32 },
}

/// The set of constraints applied to narrow the movie dataset.
///
/// Every field is independently optional or defaulted; no invariant couples
/// them. `genre` and `language` treat an empty string or the literal "any"
/// (case-insensitive) as "no filter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_rating: f64,
    pub min_votes: u64,
    pub genre: Option<String>,
    pub min_year: i32,
    pub language: Option<String>,
    pub actor: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            min_votes: 0,
            genre: None,
            min_year: 0,
            language: None,
            actor: None,
        }
    }
}

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// The genre tag to match, when the genre filter is active.
    pub fn genre_filter(&self) -> Option<&str> {
        active_tag(self.genre.as_deref())
    }

    /// The language tag to match, when the language filter is active.
    pub fn language_filter(&self) -> Option<&str> {
        active_tag(self.language.as_deref())
    }

    /// The actor-name substring to match, when the actor filter is active.
    pub fn actor_filter(&self) -> Option<&str> {
        self.actor.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

fn active_tag(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ANY))
}

/// Builder for `FilterCriteria` with fail-fast validation in `build`.
#[derive(Debug, Default, Clone)]
pub struct FilterCriteriaBuilder {
    criteria: FilterCriteria,
}

impl FilterCriteriaBuilder {
    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.criteria.min_rating = min_rating;
        self
    }

    pub fn min_votes(mut self, min_votes: u64) -> Self {
        self.criteria.min_votes = min_votes;
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.criteria.genre = Some(genre.into());
        self
    }

    pub fn min_year(mut self, min_year: i32) -> Self {
        self.criteria.min_year = min_year;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.criteria.language = Some(language.into());
        self
    }

    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.criteria.actor = Some(actor.into());
        self
    }

    /// Validate domains and produce the criteria.
    pub fn build(self) -> Result<FilterCriteria, CriteriaError> {
        let c = self.criteria;
        if !c.min_rating.is_finite() || !(0.0..=10.0).contains(&c.min_rating) {
            return Err(CriteriaError::RatingOutOfRange {
                value: c.min_rating,
            });
        }
        if c.min_year < 0 {
            return Err(CriteriaError::NegativeMinYear { value: c.min_year });
        }
        Ok(c)
    }
}
