//! CSV ingestion boundary.
//!
//! Parse errors and read errors surface as the two fixed user-facing
//! messages; on either one the caller's previously loaded dataset stays
//! untouched because nothing is returned. The analyzer is never handed a
//! partially parsed table.

use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::data::dataset::{Dataset, Row};

pub const PARSE_ERROR_MSG: &str = "Failed to parse CSV. Please check the file format.";
pub const READ_ERROR_MSG: &str = "Failed to read file. Try again with a valid CSV.";

/// Load a CSV file from disk. The dataset is named after the file stem.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        debug!("read failed for {}: {}", path.display(), e);
        anyhow!(READ_ERROR_MSG)
    })?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");

    load_csv_str(&text, name)
}

/// Parse CSV text into a [`Dataset`].
///
/// The first record is the header and supplies field order. Blank lines are
/// skipped; a record whose field count disagrees with the header is a
/// structural error and fails the whole load.
pub fn load_csv_str(text: &str, name: &str) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let fields: Vec<String> = reader
        .headers()
        .map_err(|e| {
            debug!("header parse failed: {}", e);
            anyhow!(PARSE_ERROR_MSG)
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            debug!("record parse failed: {}", e);
            anyhow!(PARSE_ERROR_MSG)
        })?;

        let mut row = Row::new();
        for (i, value) in record.iter().enumerate() {
            if let Some(field) = fields.get(i) {
                row.insert(field.clone(), value.to_string());
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    info!(
        "Loaded {}: {} rows, {} columns",
        name,
        rows.len(),
        fields.len()
    );

    Ok(Dataset::new(name, fields, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic_csv() {
        let dataset = load_csv_str("a,b\n1,x\n2,y\n", "t").unwrap();

        assert_eq!(dataset.name, "t");
        assert_eq!(dataset.fields, vec!["a", "b"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.get(0, "a"), Some("1"));
        assert_eq!(dataset.get(1, "b"), Some("y"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dataset = load_csv_str("a,b\n1,x\n\n2,y\n\n", "t").unwrap();
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let dataset = load_csv_str("a,b\r\n1,x\r\n2,y\r\n", "t").unwrap();
        assert_eq!(dataset.fields, vec!["a", "b"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.get(0, "b"), Some("x"));
    }

    #[test]
    fn test_inconsistent_field_count_is_parse_error() {
        let err = load_csv_str("a,b\n1,x\n2,y,z\n", "t").unwrap_err();
        assert_eq!(err.to_string(), PARSE_ERROR_MSG);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_csv_path("/no/such/file.csv").unwrap_err();
        assert_eq!(err.to_string(), READ_ERROR_MSG);
    }

    #[test]
    fn test_header_only_file_yields_empty_rows() {
        let dataset = load_csv_str("a,b\n", "t").unwrap();
        assert_eq!(dataset.column_count(), 2);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_quoted_fields() {
        let dataset = load_csv_str("a,b\n\"1,5\",x\n", "t").unwrap();
        assert_eq!(dataset.get(0, "a"), Some("1,5"));
    }
}
