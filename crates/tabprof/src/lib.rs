//! tabprof: profiling and quality scoring for tabular datasets.
//!
//! Given an in-memory [`DataTable`], tabprof computes per-column summaries,
//! a missing-value report, a Pearson correlation matrix over numeric
//! columns, top-category breakdowns, and a heuristic quality score in
//! [0, 1]. Every entry point is a pure function of its input: no shared
//! state, no I/O, and repeated calls yield identical results.
//!
//! # Example
//!
//! ```
//! use tabprof::{Column, DataTable};
//! use tabprof::{compute_quality_flags, missing_table, summarize_dataset};
//!
//! let table = DataTable::new(vec![
//!     Column::numeric("age", vec![Some(10.0), Some(20.0), Some(30.0), None]),
//!     Column::categorical("city", vec![Some("A"), Some("B"), Some("A"), None]),
//! ])
//! .unwrap();
//!
//! let summary = summarize_dataset(&table);
//! let missing = missing_table(&table);
//! let flags = compute_quality_flags(&summary, &missing);
//!
//! assert_eq!(summary.n_rows, 4);
//! assert_eq!(missing.get("age").unwrap().missing_count, 1);
//! assert!((0.0..=1.0).contains(&flags.quality_score));
//! ```

pub mod analyze;
pub mod error;
pub mod profile;
pub mod quality;
pub mod report;
pub mod table;

pub use analyze::{
    CategoryCount, CorrelationMatrix, TopCategories, correlation_matrix, top_categories,
};
pub use error::{Result, TabprofError};
pub use profile::{
    ColumnSummary, DatasetSummary, MissingEntry, MissingTable, missing_table, summarize_dataset,
};
pub use quality::{Heuristic, QualityFlags, QualityScorer, compute_quality_flags};
pub use report::{SummaryRow, flatten_summary_for_print};
pub use table::{Column, ColumnKind, CsvLoader, DataTable, LoaderConfig, Value};
