//! Dataset profiling: type inference, counts, and numeric statistics.
//!
//! `analyze` is a pure function of its input. Re-running it on the same rows
//! yields identical output; malformed or empty input degrades to zero/empty
//! results instead of failing.

use serde::Serialize;
use std::collections::HashSet;

use crate::data::dataset::Row;

/// Maximum number of example values kept per column.
const SAMPLE_LIMIT: usize = 3;

/// Inferred column type.
///
/// A column is `Numeric` only when every non-empty value parses under
/// [`parse_number`] and at least one such value exists. A single non-parsing
/// non-empty value anywhere forces `Text`, as does an all-empty column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Text,
}

/// Descriptive statistics for a numeric column, computed over the parsed
/// values in row order. `mean` and `median` are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Per-column derived facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    /// Count of distinct non-empty values (case-sensitive, raw cell text).
    pub unique_values: usize,
    /// Cells that are missing or whitespace-only.
    pub empty_values: usize,
    /// Up to [`SAMPLE_LIMIT`] distinct non-empty raw values, first-seen order.
    pub samples: Vec<String>,
    /// Present only for numeric columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<NumericStats>,
}

/// Dataset-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub numeric_columns: usize,
    /// Sum of `empty_values` across all columns.
    pub missing_cells: usize,
    /// 100 * non-empty cells / total cells, rounded to 1 decimal place.
    /// 100.0 for an empty dataset.
    pub completeness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub summary: DatasetSummary,
    pub columns: Vec<ColumnProfile>,
}

/// Analyze rows using the first row's key iteration order for column
/// discovery. Columns that appear only in later rows are not profiled;
/// callers with a known header order should use [`analyze_with_fields`].
pub fn analyze(rows: &[Row]) -> DatasetReport {
    let fields: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();
    analyze_with_fields(rows, &fields)
}

/// Analyze rows against an explicit column list, preserving its order.
pub fn analyze_with_fields(rows: &[Row], fields: &[String]) -> DatasetReport {
    let columns: Vec<ColumnProfile> = fields
        .iter()
        .map(|field| profile_column(field, rows))
        .collect();

    let missing_cells: usize = columns.iter().map(|c| c.empty_values).sum();
    let numeric_columns = columns
        .iter()
        .filter(|c| c.column_type == ColumnType::Numeric)
        .count();

    let total_cells = rows.len() * columns.len();
    let completeness = if total_cells == 0 {
        100.0
    } else {
        round_to(
            100.0 * (total_cells - missing_cells) as f64 / total_cells as f64,
            1,
        )
    };

    DatasetReport {
        summary: DatasetSummary {
            row_count: rows.len(),
            column_count: columns.len(),
            numeric_columns,
            missing_cells,
            completeness,
        },
        columns,
    }
}

/// Single scan over all rows for one column.
fn profile_column(name: &str, rows: &[Row]) -> ColumnProfile {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut samples: Vec<String> = Vec::new();
    let mut empty_values = 0;
    let mut numeric_candidate = true;
    let mut numbers: Vec<f64> = Vec::new();

    for row in rows {
        let raw = row.get(name).map(String::as_str).unwrap_or("");
        if raw.trim().is_empty() {
            empty_values += 1;
            continue;
        }

        if seen.insert(raw) && samples.len() < SAMPLE_LIMIT {
            samples.push(raw.to_string());
        }

        // Once a value disqualifies the column, stop parsing and keep
        // scanning for empties, uniques, and samples only.
        if numeric_candidate {
            match parse_number(raw.trim()) {
                Some(n) => numbers.push(n),
                None => {
                    numeric_candidate = false;
                    numbers.clear();
                }
            }
        }
    }

    // An all-empty column has nothing to disqualify it, but nothing to
    // confirm numeric intent either.
    let is_numeric = numeric_candidate && !numbers.is_empty();
    let stats = is_numeric.then(|| numeric_stats(&mut numbers));

    ColumnProfile {
        name: name.to_string(),
        column_type: if is_numeric {
            ColumnType::Numeric
        } else {
            ColumnType::Text
        },
        unique_values: seen.len(),
        empty_values,
        samples,
        stats,
    }
}

fn numeric_stats(values: &mut Vec<f64>) -> NumericStats {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };

    NumericStats {
        min,
        max,
        mean: round_to(mean, 2),
        median: round_to(median, 2),
    }
}

/// Parse a cell under the numeric literal grammar: optional sign, one or
/// more digits, optional decimal point with optional fraction digits,
/// optional exponent. The same predicate decides both classification and
/// value extraction, so the two can never diverge.
///
/// Rejects hex, leading-dot forms, and `inf`/`nan` spellings; the parsed
/// value must be finite.
pub fn parse_number(value: &str) -> Option<f64> {
    if !is_numeric_literal(value) {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_numeric_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
