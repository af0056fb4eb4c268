//! Categories command - most frequent values per non-numeric column.

use std::path::PathBuf;

use colored::Colorize;
use tabprof::{LoaderConfig, top_categories};

use crate::cli::OutputFormat;

use super::{CommandResult, load_table};

pub fn run(
    file: PathBuf,
    loader: LoaderConfig,
    max_columns: usize,
    top_k: usize,
    format: OutputFormat,
) -> CommandResult {
    let table = load_table(&file, loader)?;
    let cats = top_categories(&table, max_columns, top_k);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&cats)?);
        return Ok(());
    }

    if cats.is_empty() {
        println!("No categorical columns selected.");
        return Ok(());
    }

    for (name, ranked) in cats.iter() {
        println!("{}", name.bold());
        for entry in ranked {
            println!("  {:<20} {}", entry.value, entry.count);
        }
        println!();
    }

    Ok(())
}
