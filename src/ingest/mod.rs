use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source is not a parsable table: {0}")]
    Malformed(#[from] csv::Error),
}

/// One raw row of the source table, fields as they appear in the file.
///
/// All fields are text; parsing into numbers and dates happens later, during
/// store construction, so that entity identity can be derived from the raw
/// text exactly as ingested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub county: String,
    pub state: String,
    pub fips: String,
    pub cases: String,
    pub deaths: String,
}

/// Read a headered CSV source file into raw rows.
///
/// Required columns, matched by header name: `date`, `county`, `state`,
/// `fips`, `cases`, `deaths`. Extra columns are ignored. An unreadable file
/// or untabular content is a fatal error; individual rows are never rejected
/// here — malformed field values flow through as text and parse to sentinels
/// later (see [`parse_count`] and [`parse_day`]).
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, IngestError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawRow = result?;
        rows.push(row);
    }

    info!(rows = rows.len(), path = %path.display(), "ingested source table");

    Ok(rows)
}

/// Parse a non-negative count field leniently.
///
/// Zero-padded text such as `"007"` parses as the integer `7`. Anything that
/// is not a plain decimal integer yields `None` — the sentinel that stands in
/// for a malformed value, deliberately not an error (rows are never rejected
/// for bad numerics; tests pin this behavior).
pub fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Parse a `YYYY-MM-DD` date field leniently; `None` on malformed input,
/// under the same sentinel policy as [`parse_count`].
pub fn parse_day(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
