//! Most-frequent-value breakdowns for non-numeric columns.

use indexmap::IndexMap;
use serde::Serialize;

use crate::table::DataTable;

/// One category value with its frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Top categories per column, keyed by column name in original column
/// order. Each list is sorted by descending count, ties in first-encounter
/// order, and holds at most the requested `top_k` entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TopCategories {
    entries: IndexMap<String, Vec<CategoryCount>>,
}

impl TopCategories {
    /// Look up the breakdown for a column.
    pub fn get(&self, name: &str) -> Option<&[CategoryCount]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Breakdowns in original column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategoryCount])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute top-`top_k` value frequencies for up to `max_columns`
/// non-numeric columns (the complement of the correlation view), in
/// original column order.
///
/// A zero `max_columns` yields an empty result; a zero `top_k` yields an
/// empty list per selected column. Columns with fewer than `top_k`
/// distinct values return all of them.
pub fn top_categories(table: &DataTable, max_columns: usize, top_k: usize) -> TopCategories {
    let entries = table
        .columns()
        .iter()
        .filter(|c| !c.kind.is_numeric())
        .take(max_columns)
        .map(|col| {
            // IndexMap insertion order is the first-encounter order that
            // breaks count ties after the stable sort.
            let mut counts: IndexMap<String, usize> = IndexMap::new();
            for value in col.values().iter().flatten() {
                *counts.entry(value.display_key()).or_insert(0) += 1;
            }

            let mut ranked: Vec<CategoryCount> = counts
                .into_iter()
                .map(|(value, count)| CategoryCount { value, count })
                .collect();
            ranked.sort_by(|a, b| b.count.cmp(&a.count));
            ranked.truncate(top_k);

            (col.name.clone(), ranked)
        })
        .collect();

    TopCategories { entries }
}
