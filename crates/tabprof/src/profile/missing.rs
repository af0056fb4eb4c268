//! Missing-value report keyed by column name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::DataTable;

/// Missing-value counts for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub missing_count: usize,
    /// Fraction of rows missing, in [0, 1]; 0.0 for an empty dataset.
    pub missing_share: f64,
}

/// Per-column missing-value report, one entry per column in original
/// column order, with lookup by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MissingTable {
    entries: IndexMap<String, MissingEntry>,
}

impl MissingTable {
    /// Look up the entry for a column.
    pub fn get(&self, name: &str) -> Option<&MissingEntry> {
        self.entries.get(name)
    }

    /// Entries in original column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MissingEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the missing-value report for a table.
pub fn missing_table(table: &DataTable) -> MissingTable {
    let n_rows = table.n_rows();
    let entries = table
        .columns()
        .iter()
        .map(|col| {
            let missing_count = n_rows - col.non_null_count();
            let missing_share = if n_rows == 0 {
                0.0
            } else {
                missing_count as f64 / n_rows as f64
            };
            (
                col.name.clone(),
                MissingEntry {
                    missing_count,
                    missing_share,
                },
            )
        })
        .collect();

    MissingTable { entries }
}
