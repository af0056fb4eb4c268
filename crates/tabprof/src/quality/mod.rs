//! Heuristic data quality scoring.
//!
//! The scorer evaluates a registry of independent heuristics over a
//! [`DatasetSummary`] and [`MissingTable`]. Every heuristic contributes a
//! named boolean flag and, when triggered, a fixed penalty; the score is
//! `1.0 - sum(penalties)` clamped to [0, 1]. An empty dataset triggers
//! nothing and scores 1.0.

use indexmap::IndexMap;
use serde::Serialize;

use crate::profile::{DatasetSummary, MissingTable};
use crate::table::ColumnKind;

/// Flag name for the constant-column heuristic.
pub const HAS_CONSTANT_COLUMNS: &str = "has_constant_columns";
/// Flag name for the high-cardinality-categorical heuristic.
pub const HAS_HIGH_CARDINALITY_CATEGORICALS: &str = "has_high_cardinality_categoricals";

/// Distinct-value ratio above which a categorical column counts as
/// high-cardinality. The boundary is exclusive: a ratio of exactly 0.5
/// does not trigger the flag.
const HIGH_CARDINALITY_RATIO: f64 = 0.5;

/// An independent quality heuristic: a named predicate with a fixed
/// penalty applied once when the predicate holds.
#[derive(Clone)]
pub struct Heuristic {
    pub name: &'static str,
    pub penalty: f64,
    pub predicate: fn(&DatasetSummary, &MissingTable) -> bool,
}

/// Result of quality evaluation: a bounded score plus one boolean per
/// registered heuristic, in registry order. Recomputed on every call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityFlags {
    pub quality_score: f64,
    flags: IndexMap<String, bool>,
}

impl QualityFlags {
    /// Whether a named flag was triggered. Unknown names are false.
    pub fn is_flagged(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn has_constant_columns(&self) -> bool {
        self.is_flagged(HAS_CONSTANT_COLUMNS)
    }

    pub fn has_high_cardinality_categoricals(&self) -> bool {
        self.is_flagged(HAS_HIGH_CARDINALITY_CATEGORICALS)
    }

    /// All flags in registry order.
    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Evaluates a registry of [`Heuristic`]s against profiling output.
pub struct QualityScorer {
    heuristics: Vec<Heuristic>,
}

impl QualityScorer {
    /// Scorer with the default heuristic registry.
    pub fn new() -> Self {
        Self {
            heuristics: vec![
                Heuristic {
                    name: HAS_CONSTANT_COLUMNS,
                    penalty: 0.10,
                    predicate: constant_columns,
                },
                Heuristic {
                    name: HAS_HIGH_CARDINALITY_CATEGORICALS,
                    penalty: 0.15,
                    predicate: high_cardinality_categoricals,
                },
            ],
        }
    }

    /// Scorer with no heuristics registered.
    pub fn empty() -> Self {
        Self {
            heuristics: Vec::new(),
        }
    }

    /// Register an additional heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristics.push(heuristic);
        self
    }

    /// Evaluate every heuristic independently and sum the triggered
    /// penalties. Deterministic and side-effect-free.
    pub fn evaluate(&self, summary: &DatasetSummary, missing: &MissingTable) -> QualityFlags {
        let mut flags = IndexMap::with_capacity(self.heuristics.len());
        let mut penalty = 0.0;

        for heuristic in &self.heuristics {
            let triggered = (heuristic.predicate)(summary, missing);
            flags.insert(heuristic.name.to_string(), triggered);
            if triggered {
                penalty += heuristic.penalty;
            }
        }

        QualityFlags {
            quality_score: (1.0 - penalty).clamp(0.0, 1.0),
            flags,
        }
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate the default heuristic registry.
pub fn compute_quality_flags(summary: &DatasetSummary, missing: &MissingTable) -> QualityFlags {
    QualityScorer::new().evaluate(summary, missing)
}

/// Any column with a single distinct value across its observed rows.
fn constant_columns(summary: &DatasetSummary, _missing: &MissingTable) -> bool {
    summary
        .columns
        .iter()
        .any(|c| c.non_null > 0 && c.unique == 1)
}

/// Any categorical column whose distinct-value ratio exceeds the
/// high-cardinality threshold. Columns with no observations are skipped.
fn high_cardinality_categoricals(summary: &DatasetSummary, _missing: &MissingTable) -> bool {
    summary
        .columns
        .iter()
        .filter(|c| matches!(c.dtype, ColumnKind::Categorical | ColumnKind::Other))
        .any(|c| c.non_null > 0 && c.cardinality_ratio() > HIGH_CARDINALITY_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{missing_table, summarize_dataset};
    use crate::table::{Column, DataTable};

    fn evaluate(table: &DataTable) -> QualityFlags {
        let summary = summarize_dataset(table);
        let missing = missing_table(table);
        compute_quality_flags(&summary, &missing)
    }

    #[test]
    fn test_constant_and_high_cardinality_penalties() {
        let table = DataTable::new(vec![
            Column::numeric("user_id", (1..=5).map(|i| Some(i as f64)).collect::<Vec<_>>()),
            Column::numeric("constant_col", vec![Some(1.0); 5]),
            Column::categorical(
                "high_card_col",
                (0..5).map(|i| Some(format!("value_{i}"))).collect::<Vec<_>>(),
            ),
            Column::numeric(
                "numeric_col",
                vec![Some(10.5), Some(20.3), Some(15.2), Some(18.7), Some(12.9)],
            ),
        ])
        .unwrap();

        let flags = evaluate(&table);
        assert!(flags.has_constant_columns());
        assert!(flags.has_high_cardinality_categoricals());
        assert!((flags.quality_score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_clean_table_scores_full() {
        let table = DataTable::new(vec![
            Column::numeric("id", vec![Some(1.0), Some(2.0), Some(3.0)]),
            Column::numeric("value", vec![Some(10.0), Some(20.0), Some(30.0)]),
        ])
        .unwrap();

        let flags = evaluate(&table);
        assert!(!flags.has_constant_columns());
        assert!(!flags.has_high_cardinality_categoricals());
        assert_eq!(flags.quality_score, 1.0);
    }

    #[test]
    fn test_cardinality_boundary_is_exclusive() {
        // 2 distinct of 4 non-null: ratio exactly 0.5, no flag.
        let at_boundary = DataTable::new(vec![Column::categorical(
            "c",
            vec![Some("A"), Some("A"), Some("B"), Some("B")],
        )])
        .unwrap();
        assert!(!evaluate(&at_boundary).has_high_cardinality_categoricals());

        // 2 distinct of 3 non-null: ratio 0.66, flag.
        let above = DataTable::new(vec![Column::categorical(
            "c",
            vec![Some("A"), Some("B"), Some("A")],
        )])
        .unwrap();
        assert!(evaluate(&above).has_high_cardinality_categoricals());
    }

    #[test]
    fn test_numeric_columns_exempt_from_cardinality_flag() {
        // Fully distinct, but numeric: not a categorical concern.
        let table = DataTable::new(vec![Column::numeric(
            "id",
            vec![Some(1.0), Some(2.0), Some(3.0)],
        )])
        .unwrap();

        assert!(!evaluate(&table).has_high_cardinality_categoricals());
    }

    #[test]
    fn test_all_null_column_triggers_nothing() {
        let table = DataTable::new(vec![Column::categorical(
            "empty",
            vec![None::<&str>, None],
        )])
        .unwrap();

        let flags = evaluate(&table);
        assert!(!flags.has_constant_columns());
        assert!(!flags.has_high_cardinality_categoricals());
        assert_eq!(flags.quality_score, 1.0);
    }

    #[test]
    fn test_empty_dataset_scores_full() {
        let flags = evaluate(&DataTable::empty());
        assert_eq!(flags.quality_score, 1.0);
        assert!(flags.flags().all(|(_, triggered)| !triggered));
    }

    #[test]
    fn test_custom_heuristic_extends_registry() {
        fn any_missing(_summary: &DatasetSummary, missing: &MissingTable) -> bool {
            missing.iter().any(|(_, entry)| entry.missing_count > 0)
        }

        let table = DataTable::new(vec![Column::numeric("x", vec![Some(1.0), None])]).unwrap();
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);

        let scorer = QualityScorer::new().with_heuristic(Heuristic {
            name: "has_missing_values",
            penalty: 0.05,
            predicate: any_missing,
        });
        let flags = scorer.evaluate(&summary, &missing);

        assert!(flags.is_flagged("has_missing_values"));
        assert!((flags.quality_score - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_score_floor_at_zero() {
        fn always(_: &DatasetSummary, _: &MissingTable) -> bool {
            true
        }

        let table = DataTable::new(vec![Column::numeric("x", vec![Some(1.0)])]).unwrap();
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);

        let scorer = QualityScorer::empty()
            .with_heuristic(Heuristic {
                name: "a",
                penalty: 0.7,
                predicate: always,
            })
            .with_heuristic(Heuristic {
                name: "b",
                penalty: 0.7,
                predicate: always,
            });

        assert_eq!(scorer.evaluate(&summary, &missing).quality_score, 0.0);
    }
}
