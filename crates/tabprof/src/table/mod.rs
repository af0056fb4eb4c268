//! In-memory table model.
//!
//! A [`DataTable`] is an ordered sequence of named, typed columns with a
//! shared row count. Missing cells are represented uniformly as `None`, so
//! every analysis pass uses the same null-detection rule regardless of the
//! column's value kind.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabprofError};

mod loader;

pub use loader::{CsvLoader, LoaderConfig, is_null_token};

/// Declared value kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating-point values.
    Numeric,
    /// Text values with discrete categories.
    Categorical,
    /// Boolean values.
    Boolean,
    /// Date and/or time values.
    Datetime,
    /// Anything that fits none of the above.
    Other,
}

impl ColumnKind {
    /// Returns true if this kind participates in correlation analysis.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Other => "other",
        };
        write!(f, "{tag}")
    }
}

/// A single non-missing cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Canonical string rendering used as a key for distinct counting and
    /// category frequencies. Whole numbers render without a trailing `.0`
    /// so `1` and `1.0` count as the same category.
    pub fn display_key(&self) -> String {
        match self {
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::Text(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::DateTime(dt) => dt.to_string(),
        }
    }
}

/// A named, typed column. `None` cells are missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    values: Vec<Option<Value>>,
}

impl Column {
    /// Create a column from pre-built values.
    pub fn new(name: impl Into<String>, kind: ColumnKind, values: Vec<Option<Value>>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Create a numeric column.
    pub fn numeric(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        Self::new(
            name,
            ColumnKind::Numeric,
            values.into_iter().map(|v| v.map(Value::Number)).collect(),
        )
    }

    /// Create a categorical (text) column.
    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        Self::new(
            name,
            ColumnKind::Categorical,
            values
                .into_iter()
                .map(|v| v.map(|s| Value::Text(s.into())))
                .collect(),
        )
    }

    /// Create a boolean column.
    pub fn boolean(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<bool>>,
    ) -> Self {
        Self::new(
            name,
            ColumnKind::Boolean,
            values.into_iter().map(|v| v.map(Value::Bool)).collect(),
        )
    }

    /// Create a datetime column.
    pub fn datetime(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<NaiveDateTime>>,
    ) -> Self {
        Self::new(
            name,
            ColumnKind::Datetime,
            values.into_iter().map(|v| v.map(Value::DateTime)).collect(),
        )
    }

    /// Number of cells, missing included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cells in row order.
    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Count of non-missing cells.
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Row-aligned numeric view. Non-numeric and missing cells are `None`,
    /// so two columns can be paired row by row for correlation.
    pub fn numeric_values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values
            .iter()
            .map(|v| v.as_ref().and_then(Value::as_f64))
    }
}

/// An immutable in-memory table: ordered columns, fixed row count.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl DataTable {
    /// Build a table from columns. Fails when column lengths disagree;
    /// this is the one malformed-input fault the library surfaces.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(TabprofError::RaggedColumns {
                column: bad.name.clone(),
                expected: n_rows,
                actual: bad.len(),
            });
        }
        Ok(Self { columns, n_rows })
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            n_rows: 0,
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Columns in original order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
