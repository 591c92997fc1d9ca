//! Filter on a single language tag.
//!
//! Like the genre filter this is a substring test on the comma-delimited
//! language column, but case-insensitive.

use crate::traits::RowFilter;
use anyhow::Result;
use data_loader::MovieDataset;

/// Keeps rows whose language field contains the requested tag,
/// ignoring ASCII case.
pub struct LanguageFilter {
    tag_lower: String,
}

impl LanguageFilter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_lower: tag.into().to_lowercase(),
        }
    }
}

impl RowFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, rows: Vec<usize>, dataset: &MovieDataset) -> Result<Vec<usize>> {
        Ok(rows
            .into_iter()
            .filter(|&row| {
                dataset.get(row).is_some_and(|record| {
                    record
                        .language
                        .as_deref()
                        .is_some_and(|languages| {
                            languages.to_lowercase().contains(&self.tag_lower)
                        })
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_record, dataset_of};

    fn with_language(title: &str, language: Option<&str>) -> data_loader::MovieRecord {
        let mut record = base_record(title);
        record.language = language.map(str::to_string);
        record
    }

    #[test]
    fn test_language_filter_is_case_insensitive() {
        let dataset = dataset_of(vec![
            with_language("A", Some("English, French")),
            with_language("B", Some("Japanese")),
        ]);

        let filter = LanguageFilter::new("english");
        let rows = filter.apply(vec![0, 1], &dataset).unwrap();

        assert_eq!(rows, vec![0]);
    }

    #[test]
    fn test_missing_language_never_matches() {
        let dataset = dataset_of(vec![with_language("A", None)]);

        let filter = LanguageFilter::new("English");
        let rows = filter.apply(vec![0], &dataset).unwrap();

        assert!(rows.is_empty());
    }
}
