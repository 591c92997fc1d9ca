//! Parser for the movie CSV dataset.
//!
//! The source is a single CSV file with a header row. Fields may be quoted
//! and quoted fields may contain commas, doubled quotes, and newlines, so
//! record splitting walks the input with a small quote-aware state machine.
//! Type coercion of the split records then runs in parallel with Rayon.
//!
//! Malformed rows are tolerated: a row with the wrong field count, a blank
//! title, or a non-numeric `avg_vote`/`votes` is skipped with a warning
//! rather than aborting the whole load. A non-numeric `year` is NOT a load
//! error; the row is kept and the engine excludes it at query time when a
//! year bound applies.

use crate::error::{DataLoadError, Result};
use crate::types::{MovieDataset, MovieRecord, PRIORITY_COLUMNS};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Columns that must be present for the dataset to be usable at all.
const REQUIRED_COLUMNS: [&str; 3] = ["title", "avg_vote", "votes"];

/// Load and parse a dataset from a local CSV file.
pub fn load_from_path(path: &Path) -> Result<MovieDataset> {
    let content = fs::read_to_string(path)?;
    parse_csv_str(&content)
}

/// Parse CSV text into a `MovieDataset`.
///
/// The first record is the header. Rows that fail coercion are skipped and
/// counted; the function only errors when the header itself is unusable.
pub fn parse_csv_str(input: &str) -> Result<MovieDataset> {
    let mut raw_records = split_records(input);
    if raw_records.is_empty() {
        return Err(DataLoadError::MissingHeader);
    }

    let header = raw_records.remove(0);
    let columns: Vec<String> = header.iter().map(|c| c.trim().to_string()).collect();
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(DataLoadError::MissingColumn {
                column: required.to_string(),
            });
        }
    }
    let layout = ColumnLayout::from_columns(&columns);

    let total = raw_records.len();
    // Coerce rows in parallel; par_iter on a Vec preserves input order.
    let records: Vec<MovieRecord> = raw_records
        .par_iter()
        .enumerate()
        .filter_map(|(idx, fields)| match parse_record(fields, &columns, &layout) {
            Ok(record) => Some(record),
            Err(reason) => {
                // Header is line 1, first data row is line 2.
                warn!(line = idx + 2, %reason, "Skipping malformed row");
                None
            }
        })
        .collect();

    let skipped = total - records.len();
    if skipped > 0 {
        warn!("Skipped {} of {} rows during load", skipped, total);
    }
    info!(
        "Parsed {} movie records across {} columns",
        records.len(),
        columns.len()
    );

    Ok(MovieDataset { columns, records })
}

/// Positions of the known columns within the header, plus the indices of
/// every passthrough column.
struct ColumnLayout {
    title: usize,
    avg_vote: usize,
    votes: usize,
    year: Option<usize>,
    genre: Option<usize>,
    language: Option<usize>,
    duration: Option<usize>,
    actors: Option<usize>,
    extra: Vec<usize>,
}

impl ColumnLayout {
    fn from_columns(columns: &[String]) -> Self {
        let find = |name: &str| columns.iter().position(|c| c == name);
        let extra = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !PRIORITY_COLUMNS.contains(&c.as_str()))
            .map(|(i, _)| i)
            .collect();
        Self {
            // Presence of the required columns is checked before this runs.
            title: find("title").unwrap_or(0),
            avg_vote: find("avg_vote").unwrap_or(0),
            votes: find("votes").unwrap_or(0),
            year: find("year"),
            genre: find("genre"),
            language: find("language"),
            duration: find("duration"),
            actors: find("actors"),
            extra,
        }
    }
}

/// Coerce one split record into a `MovieRecord`.
///
/// Returns a human-readable reason on failure; the caller logs it and drops
/// the row.
fn parse_record(
    fields: &[String],
    columns: &[String],
    layout: &ColumnLayout,
) -> std::result::Result<MovieRecord, String> {
    if fields.len() != columns.len() {
        return Err(format!(
            "expected {} fields but found {}",
            columns.len(),
            fields.len()
        ));
    }

    let title = fields[layout.title].trim();
    if title.is_empty() {
        return Err("empty title".to_string());
    }

    let avg_vote_raw = fields[layout.avg_vote].trim();
    let avg_vote: f64 = avg_vote_raw
        .parse()
        .map_err(|_| format!("invalid avg_vote '{}'", avg_vote_raw))?;

    let votes_raw = fields[layout.votes].trim();
    let votes: u64 = votes_raw
        .parse()
        .map_err(|_| format!("invalid votes '{}'", votes_raw))?;

    let year_raw = layout
        .year
        .map(|i| fields[i].trim().to_string())
        .unwrap_or_default();
    let year = year_raw.parse::<i32>().ok();

    let optional = |idx: Option<usize>| -> Option<String> {
        idx.map(|i| fields[i].trim()).filter(|s| !s.is_empty()).map(str::to_string)
    };

    let duration = layout
        .duration
        .and_then(|i| fields[i].trim().parse::<u32>().ok());

    let extra = layout
        .extra
        .iter()
        .map(|&i| (columns[i].clone(), fields[i].trim().to_string()))
        .collect();

    Ok(MovieRecord {
        title: title.to_string(),
        year,
        year_raw,
        genre: optional(layout.genre),
        avg_vote,
        votes,
        language: optional(layout.language),
        duration,
        actors: optional(layout.actors),
        extra,
    })
}

/// Split CSV text into records of fields, honoring quoting.
///
/// Inside quotes, commas and newlines are literal and `""` is an escaped
/// quote. Blank lines between records are dropped.
fn split_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                '\r' => {} // CRLF line endings; the '\n' closes the record
                '\n' => {
                    fields.push(std::mem::take(&mut field));
                    if !(fields.len() == 1 && fields[0].is_empty()) {
                        records.push(std::mem::take(&mut fields));
                    } else {
                        fields.clear();
                    }
                }
                _ => field.push(c),
            }
        }
    }
    // Final record when the input does not end with a newline.
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        if !(fields.len() == 1 && fields[0].is_empty()) {
            records.push(fields);
        }
    }

    records
}
