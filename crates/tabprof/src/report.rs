//! Flattening of structured summaries into printable rows.

use serde::Serialize;

use crate::profile::DatasetSummary;
use crate::table::ColumnKind;

/// One printable row per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub dtype: ColumnKind,
    pub non_null: usize,
    pub unique: usize,
    pub missing_share: f64,
}

/// Project a [`DatasetSummary`] into one row per column. Pure projection,
/// no business logic; `missing_share` is 0.0 for an empty dataset.
pub fn flatten_summary_for_print(summary: &DatasetSummary) -> Vec<SummaryRow> {
    summary
        .columns
        .iter()
        .map(|col| SummaryRow {
            name: col.name.clone(),
            dtype: col.dtype,
            non_null: col.non_null,
            unique: col.unique,
            missing_share: if summary.n_rows == 0 {
                0.0
            } else {
                col.missing as f64 / summary.n_rows as f64
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::summarize_dataset;
    use crate::table::{Column, DataTable};

    #[test]
    fn test_one_row_per_column() {
        let table = DataTable::new(vec![
            Column::numeric("age", vec![Some(10.0), Some(20.0), Some(30.0), None]),
            Column::categorical("city", vec![Some("A"), Some("B"), Some("A"), None]),
        ])
        .unwrap();

        let rows = flatten_summary_for_print(&summarize_dataset(&table));
        assert_eq!(rows.len(), 2);

        let age = &rows[0];
        assert_eq!(age.name, "age");
        assert_eq!(age.dtype, ColumnKind::Numeric);
        assert_eq!(age.non_null, 3);
        assert_eq!(age.unique, 3);
        assert!((age.missing_share - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary_flattens_to_nothing() {
        let rows = flatten_summary_for_print(&summarize_dataset(&DataTable::empty()));
        assert!(rows.is_empty());
    }
}
