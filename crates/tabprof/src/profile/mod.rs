//! Per-column and dataset-level descriptive summaries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::{Column, ColumnKind, DataTable};

pub mod missing;

pub use missing::{MissingEntry, MissingTable, missing_table};

/// Descriptive statistics for a single column.
///
/// `non_null + missing` always equals the owning dataset's row count, and
/// `unique` never exceeds `non_null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: ColumnKind,
    pub non_null: usize,
    pub unique: usize,
    pub missing: usize,
}

impl ColumnSummary {
    /// Fraction of non-null values that are distinct, 0.0 when the column
    /// has no observations.
    pub fn cardinality_ratio(&self) -> f64 {
        if self.non_null == 0 {
            0.0
        } else {
            self.unique as f64 / self.non_null as f64
        }
    }
}

/// Dataset-level summary: row/column counts plus one [`ColumnSummary`]
/// per column, in original column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Look up a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Summarize every column of a table.
///
/// Pure function of the input: column order is preserved, and an empty
/// table yields zero counts with an empty column list rather than an error.
pub fn summarize_dataset(table: &DataTable) -> DatasetSummary {
    let n_rows = table.n_rows();
    let columns = table
        .columns()
        .iter()
        .map(|col| summarize_column(col, n_rows))
        .collect();

    DatasetSummary {
        n_rows,
        n_cols: table.n_cols(),
        columns,
    }
}

fn summarize_column(column: &Column, n_rows: usize) -> ColumnSummary {
    let mut non_null = 0;
    let mut distinct: HashSet<String> = HashSet::new();

    for value in column.values().iter().flatten() {
        non_null += 1;
        distinct.insert(value.display_key());
    }

    ColumnSummary {
        name: column.name.clone(),
        dtype: column.kind,
        non_null,
        unique: distinct.len(),
        missing: n_rows - non_null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn sample_table() -> DataTable {
        DataTable::new(vec![
            Column::numeric("age", vec![Some(10.0), Some(20.0), Some(30.0), None]),
            Column::numeric(
                "height",
                vec![Some(140.0), Some(150.0), Some(160.0), Some(170.0)],
            ),
            Column::categorical("city", vec![Some("A"), Some("B"), Some("A"), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_summarize_counts() {
        let summary = summarize_dataset(&sample_table());

        assert_eq!(summary.n_rows, 4);
        assert_eq!(summary.n_cols, 3);

        let age = summary.column("age").unwrap();
        assert_eq!(age.non_null, 3);
        assert_eq!(age.unique, 3);
        assert_eq!(age.missing, 1);
        assert_eq!(age.dtype, ColumnKind::Numeric);

        let city = summary.column("city").unwrap();
        assert_eq!(city.non_null, 3);
        assert_eq!(city.unique, 2);
        assert_eq!(city.missing, 1);
    }

    #[test]
    fn test_column_order_preserved() {
        let summary = summarize_dataset(&sample_table());
        let names: Vec<&str> = summary.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["age", "height", "city"]);
    }

    #[test]
    fn test_empty_table() {
        let summary = summarize_dataset(&DataTable::empty());
        assert_eq!(summary.n_rows, 0);
        assert_eq!(summary.n_cols, 0);
        assert!(summary.columns.is_empty());
    }

    #[test]
    fn test_all_null_column() {
        let table = DataTable::new(vec![Column::categorical(
            "empty",
            vec![None::<&str>, None, None],
        )])
        .unwrap();
        let summary = summarize_dataset(&table);

        let col = summary.column("empty").unwrap();
        assert_eq!(col.non_null, 0);
        assert_eq!(col.unique, 0);
        assert_eq!(col.missing, 3);
        assert_eq!(col.cardinality_ratio(), 0.0);
    }
}
