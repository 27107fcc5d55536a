//! A view over a dataset that can sort, filter, and cap rows without
//! modifying the underlying data.

use anyhow::Result;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use crate::data::analyzer::parse_number;
use crate::data::dataset::{Dataset, Row};

#[derive(Clone)]
pub struct DataView {
    /// The underlying immutable data source
    source: Arc<Dataset>,

    /// Row indices that are visible (after filtering)
    visible_rows: Vec<usize>,

    /// Display cap applied at render time; the source is never truncated
    limit: Option<usize>,
}

impl DataView {
    /// Create a new view showing all rows of the dataset.
    pub fn new(source: Arc<Dataset>) -> Self {
        let row_count = source.row_count();
        Self {
            source,
            visible_rows: (0..row_count).collect(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sort visible rows by a column. Cells that both parse as numbers
    /// compare numerically; otherwise the comparison is lexicographic.
    /// Empty cells sort first.
    pub fn sort_by(mut self, field: &str, ascending: bool) -> Result<Self> {
        if !self.source.has_field(field) {
            return Err(anyhow::anyhow!("Unknown column: {}", field));
        }

        let source = &self.source;
        self.visible_rows.sort_by(|&a, &b| {
            let cell_a = source.get(a, field).unwrap_or("");
            let cell_b = source.get(b, field).unwrap_or("");
            let cmp = compare_cells(cell_a, cell_b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        Ok(self)
    }

    /// Keep only rows where some cell contains `needle`, case-insensitive.
    /// An empty needle leaves the view unchanged.
    pub fn filter_contains(mut self, needle: &str) -> Self {
        if needle.is_empty() {
            return self;
        }

        let needle = needle.to_lowercase();
        let source = &self.source;
        self.visible_rows.retain(|&idx| {
            source.fields.iter().any(|field| {
                source
                    .get(idx, field)
                    .is_some_and(|cell| cell.to_lowercase().contains(&needle))
            })
        });

        debug!(
            "filter '{}' kept {} of {} rows",
            needle,
            self.visible_rows.len(),
            self.source.row_count()
        );
        self
    }

    /// Number of rows the view will render (after the display cap).
    pub fn row_count(&self) -> usize {
        match self.limit {
            Some(limit) => self.visible_rows.len().min(limit),
            None => self.visible_rows.len(),
        }
    }

    /// Number of rows that passed the filter, before the display cap.
    pub fn matched_row_count(&self) -> usize {
        self.visible_rows.len()
    }

    pub fn fields(&self) -> &[String] {
        &self.source.fields
    }

    pub fn source(&self) -> &Dataset {
        &self.source
    }

    /// Get a visible row by display index.
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        if index >= self.row_count() {
            return None;
        }
        let row_idx = *self.visible_rows.get(index)?;
        self.source.rows.get(row_idx)
    }

    /// All rows the view will render, in display order.
    pub fn rows(&self) -> Vec<&Row> {
        (0..self.row_count())
            .filter_map(|i| self.get_row(i))
            .collect()
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => match (parse_number(a), parse_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.cmp(b),
        },
    }
}
