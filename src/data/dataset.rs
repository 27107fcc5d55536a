use std::collections::BTreeMap;

/// One record of a dataset: column name mapped to raw cell text.
///
/// A row may lack a key when the source data was irregular; absent keys are
/// treated as empty cells everywhere downstream.
pub type Row = BTreeMap<String, String>;

/// An in-memory table of string-keyed rows.
///
/// `fields` carries column identity and display order separately from the
/// rows, since the maps themselves iterate in key order rather than source
/// order. Loaders fill it from the header record.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub fields: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, fields: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            fields,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Get a cell by row index and column name. Returns None for both an
    /// out-of-range row and a key the row does not carry.
    pub fn get(&self, row: usize, field: &str) -> Option<&str> {
        self.rows.get(row)?.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_counts_and_lookup() {
        let dataset = Dataset::new(
            "trades",
            vec!["book".to_string(), "price".to_string()],
            vec![
                row(&[("book", "FX"), ("price", "101.5")]),
                row(&[("book", "Rates"), ("price", "99")]),
            ],
        );

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column_count(), 2);
        assert!(!dataset.is_empty());
        assert!(dataset.has_field("price"));
        assert!(!dataset.has_field("qty"));
        assert_eq!(dataset.get(0, "book"), Some("FX"));
        assert_eq!(dataset.get(1, "price"), Some("99"));
        assert_eq!(dataset.get(2, "book"), None);
        assert_eq!(dataset.get(0, "qty"), None);
    }
}
