//! Correlation command - Pearson matrix over numeric columns.

use std::path::PathBuf;

use tabprof::{LoaderConfig, correlation_matrix};

use crate::cli::OutputFormat;

use super::{CommandResult, fmt_value, load_table};

pub fn run(file: PathBuf, loader: LoaderConfig, format: OutputFormat) -> CommandResult {
    let table = load_table(&file, loader)?;
    let corr = correlation_matrix(&table);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&corr)?);
        return Ok(());
    }

    if corr.is_empty() {
        println!("Fewer than 2 numeric columns; nothing to correlate.");
        return Ok(());
    }

    let width = corr
        .columns()
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(8)
        .max(8);

    print!("{:width$}", "");
    for name in corr.columns() {
        print!("  {:>width$}", name);
    }
    println!();

    for (name, row) in corr.columns().iter().zip(corr.values()) {
        print!("{:<width$}", name);
        for value in row {
            print!("  {:>width$}", fmt_value(*value));
        }
        println!();
    }

    Ok(())
}
