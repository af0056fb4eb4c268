//! Pairwise Pearson correlation over numeric columns.

use serde::Serialize;

use crate::table::DataTable;

use super::stats::pearson;

/// Symmetric correlation matrix over the table's numeric columns, in
/// original column order. Empty when fewer than 2 numeric columns exist.
/// Undefined correlations (zero variance, no paired observations) are
/// `NaN`; serde_json renders those as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Numeric column names, in original order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Look up the correlation for a pair of columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Row-major matrix values, aligned with [`Self::columns`].
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute the correlation matrix for a table.
///
/// Each pair is correlated over its pairwise-complete observations: only
/// rows where both cells are non-missing contribute. Fewer than 2 numeric
/// columns yield an empty matrix, not an error.
pub fn correlation_matrix(table: &DataTable) -> CorrelationMatrix {
    let numeric: Vec<(&str, Vec<Option<f64>>)> = table
        .columns()
        .iter()
        .filter(|c| c.kind.is_numeric())
        .map(|c| (c.name.as_str(), c.numeric_values().collect()))
        .collect();

    if numeric.len() < 2 {
        return CorrelationMatrix::default();
    }

    let n = numeric.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pairwise_pearson(&numeric[i].1, &numeric[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: numeric.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}

/// Drop rows where either side is missing, then correlate.
fn pairwise_pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let (px, py): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| x.zip(*y))
        .unzip();
    pearson(&px, &py)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn test_correlated_columns() {
        let table = DataTable::new(vec![
            Column::numeric("age", vec![Some(10.0), Some(20.0), Some(30.0), None]),
            Column::numeric(
                "height",
                vec![Some(140.0), Some(150.0), Some(160.0), Some(170.0)],
            ),
            Column::categorical("city", vec![Some("A"), Some("B"), Some("A"), None]),
        ])
        .unwrap();

        let corr = correlation_matrix(&table);
        assert_eq!(corr.columns(), &["age", "height"]);
        assert_eq!(corr.get("age", "age"), Some(1.0));

        // age/height pair over the 3 complete rows is perfectly linear.
        let r = corr.get("age", "height").unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(corr.get("age", "height"), corr.get("height", "age"));
    }

    #[test]
    fn test_fewer_than_two_numeric_columns() {
        let table = DataTable::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0)]),
            Column::categorical("c", vec![Some("a"), Some("b")]),
        ])
        .unwrap();

        assert!(correlation_matrix(&table).is_empty());
        assert!(correlation_matrix(&DataTable::empty()).is_empty());
    }

    #[test]
    fn test_zero_variance_column_is_nan() {
        let table = DataTable::new(vec![
            Column::numeric("constant", vec![Some(5.0), Some(5.0), Some(5.0)]),
            Column::numeric("varying", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ])
        .unwrap();

        let corr = correlation_matrix(&table);
        assert!(corr.get("constant", "varying").unwrap().is_nan());
        assert_eq!(corr.get("constant", "constant"), Some(1.0));
    }

    #[test]
    fn test_non_numeric_excluded() {
        let table = DataTable::new(vec![
            Column::categorical("a", vec![Some("x")]),
            Column::boolean("b", vec![Some(true)]),
        ])
        .unwrap();

        assert!(correlation_matrix(&table).is_empty());
    }
}
