//! Built-in demo dataset, usable as a one-click fallback when no file has
//! been loaded.

use crate::data::dataset::{Dataset, Row};

const DEMO_CSV: &str = "region,category,sales,profit,date
West,Technology,1200,140,2023-01-12
East,Furniture,890,60,2023-02-01
South,Office Supplies,450,35,2023-02-18
North,Technology,980,110,2023-03-02
West,Furniture,620,55,2023-03-10
East,Office Supplies,720,85,2023-04-21
South,Technology,1520,220,2023-05-05
North,Furniture,410,18,2023-05-16
West,Office Supplies,510,42,2023-06-03
East,Technology,1320,180,2023-06-22";

/// Build the demo dataset: 10 rows, 5 columns.
pub fn demo_dataset() -> Dataset {
    split_rows(DEMO_CSV, "demo")
}

/// Plain comma splitting for the fixture; it carries no quoted fields.
/// Tolerates both `\n` and `\r\n` endings and drops trailing blank lines.
fn split_rows(csv_text: &str, name: &str) -> Dataset {
    let mut lines = csv_text.lines().filter(|line| !line.trim().is_empty());

    let fields: Vec<String> = match lines.next() {
        Some(header) => header.split(',').map(|f| f.trim().to_string()).collect(),
        None => return Dataset::new(name, Vec::new(), Vec::new()),
    };

    let rows: Vec<Row> = lines
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            fields
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    let cell = cells.get(i).copied().unwrap_or("");
                    (field.clone(), cell.to_string())
                })
                .collect()
        })
        .collect();

    Dataset::new(name, fields, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_shape() {
        let dataset = demo_dataset();

        assert_eq!(dataset.row_count(), 10);
        assert_eq!(
            dataset.fields,
            vec!["region", "category", "sales", "profit", "date"]
        );
        assert_eq!(dataset.get(0, "region"), Some("West"));
        assert_eq!(dataset.get(9, "sales"), Some("1320"));
    }

    #[test]
    fn test_split_tolerates_crlf_and_trailing_blanks() {
        let dataset = split_rows("a,b\r\n1,x\r\n2,y\r\n\r\n\n", "t");

        assert_eq!(dataset.fields, vec!["a", "b"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.get(1, "b"), Some("y"));
    }

    #[test]
    fn test_short_line_pads_with_empty() {
        let dataset = split_rows("a,b,c\n1,2\n", "t");
        assert_eq!(dataset.get(0, "c"), Some(""));
    }

    #[test]
    fn test_empty_text_yields_empty_dataset() {
        let dataset = split_rows("", "t");
        assert!(dataset.fields.is_empty());
        assert!(dataset.is_empty());
    }
}
