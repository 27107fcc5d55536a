//! Terminal rendering for summary tiles, column insight cards, and the data
//! grid. Consumes the analyzer's output as-is; no aggregation happens here.

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use crate::data::analyzer::{ColumnProfile, ColumnType, DatasetSummary};
use crate::data::data_view::DataView;

pub fn display_summary(summary: &DatasetSummary) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        [
            "Rows",
            "Columns",
            "Numeric Columns",
            "Missing Cells",
            "Completeness",
        ]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    table.add_row(vec![
        summary.row_count.to_string(),
        summary.column_count.to_string(),
        summary.numeric_columns.to_string(),
        summary.missing_cells.to_string(),
        format!("{:.1}%", summary.completeness),
    ]);

    println!("{table}");
}

pub fn display_columns(columns: &[ColumnProfile]) {
    if columns.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        [
            "Column", "Type", "Unique", "Empty", "Samples", "Min", "Max", "Mean", "Median",
        ]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    for column in columns {
        let type_label = match column.column_type {
            ColumnType::Numeric => "numeric",
            ColumnType::Text => "text",
        };
        let samples = if column.samples.is_empty() {
            "-".to_string()
        } else {
            column.samples.join(", ")
        };

        let (min, max, mean, median) = match &column.stats {
            Some(stats) => (
                trim_float(stats.min),
                trim_float(stats.max),
                format!("{:.2}", stats.mean),
                format!("{:.2}", stats.median),
            ),
            None => ("".into(), "".into(), "".into(), "".into()),
        };

        table.add_row(vec![
            column.name.clone(),
            type_label.to_string(),
            column.unique_values.to_string(),
            column.empty_values.to_string(),
            samples,
            min,
            max,
            mean,
            median,
        ]);
    }

    println!("{table}");
}

pub fn display_rows(view: &DataView, show_row_numbers: bool) {
    if view.matched_row_count() == 0 {
        println!("{}", "No rows to display.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers: Vec<Cell> = Vec::new();
    if show_row_numbers {
        headers.push(Cell::new("#").add_attribute(Attribute::Bold));
    }
    headers.extend(
        view.fields()
            .iter()
            .map(|f| Cell::new(f).add_attribute(Attribute::Bold)),
    );
    table.set_header(headers);

    for (i, row) in view.rows().iter().enumerate() {
        let mut cells: Vec<String> = Vec::new();
        if show_row_numbers {
            cells.push((i + 1).to_string());
        }
        cells.extend(
            view.fields()
                .iter()
                .map(|field| row.get(field).cloned().unwrap_or_default()),
        );
        table.add_row(cells);
    }

    println!("{table}");
    println!(
        "\n{}",
        format!(
            "Showing {} of {} rows",
            view.row_count(),
            view.matched_row_count()
        )
        .green()
    );
}

/// Min/max come straight from the data, so render integers without a
/// trailing ".0".
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(410.0), "410");
        assert_eq!(trim_float(-3.0), "-3");
        assert_eq!(trim_float(2.5), "2.5");
    }
}
