//! Command implementations.

use std::path::Path;

use tabprof::{CsvLoader, DataTable, LoaderConfig};

pub mod categories;
pub mod correlation;
pub mod overview;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Translate global CLI flags into a loader configuration.
pub fn loader_options(delimiter: Option<char>, max_rows: Option<usize>) -> LoaderConfig {
    LoaderConfig {
        delimiter: delimiter.map(|c| c as u8),
        max_rows,
        ..LoaderConfig::default()
    }
}

/// Load the table every subcommand starts from.
pub fn load_table(path: &Path, config: LoaderConfig) -> Result<DataTable, tabprof::TabprofError> {
    CsvLoader::with_config(config).load_path(path)
}

/// Render a float for table output; NaN prints as a dash.
pub fn fmt_value(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.3}", value)
    }
}
