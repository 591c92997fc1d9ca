//! The bounded, sorted output of one query execution.

use data_loader::MovieRecord;

/// One query's result: the surviving rows plus the column order the
/// display surface should render them in.
///
/// A `ResultSet` is ephemeral. It is recomputed on each search and the
/// session layer replaces the previous one wholesale; nothing mutates a
/// result in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<MovieRecord>,
}

impl ResultSet {
    /// An empty result carrying a column layout, used for the "no data"
    /// state when the source is unavailable.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Titles in result order, mostly useful in tests and logs.
    pub fn titles(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.title.as_str()).collect()
    }

    /// Render one row as display cells following `self.columns`.
    ///
    /// A column a record has never seen (possible when remote rows carry
    /// heterogeneous extras) renders as an empty cell.
    pub fn cells(&self, row: usize) -> Vec<String> {
        let Some(record) = self.rows.get(row) else {
            return Vec::new();
        };
        self.columns
            .iter()
            .map(|column| {
                record
                    .field(column)
                    .map(|v| v.into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::base_record;

    #[test]
    fn test_empty_result_keeps_columns() {
        let result = ResultSet::empty(vec!["title".to_string(), "year".to_string()]);

        assert!(result.is_empty());
        assert_eq!(result.columns, vec!["title", "year"]);
    }

    #[test]
    fn test_cells_follow_column_order() {
        let result = ResultSet {
            columns: vec!["year".to_string(), "title".to_string()],
            rows: vec![base_record("Arrival")],
        };

        assert_eq!(result.cells(0), vec!["2000", "Arrival"]);
        assert!(result.cells(5).is_empty());
    }
}
