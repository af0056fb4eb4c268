//! Overview command - column summaries, missing values, quality score.

use std::path::PathBuf;

use colored::Colorize;
use tabprof::{
    LoaderConfig, compute_quality_flags, flatten_summary_for_print, missing_table,
    summarize_dataset,
};

use crate::cli::OutputFormat;

use super::{CommandResult, fmt_value, load_table};

pub fn run(file: PathBuf, loader: LoaderConfig, format: OutputFormat) -> CommandResult {
    let table = load_table(&file, loader)?;

    let summary = summarize_dataset(&table);
    let missing = missing_table(&table);
    let flags = compute_quality_flags(&summary, &missing);
    let rows = flatten_summary_for_print(&summary);

    if format == OutputFormat::Json {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "n_rows": summary.n_rows,
            "n_cols": summary.n_cols,
            "columns": rows,
            "missing": missing,
            "quality": flags,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} rows x {} columns",
        "Dataset:".bold(),
        summary.n_rows,
        summary.n_cols
    );
    println!();

    let name_width = rows
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or(4);

    println!(
        "{:<name_width$}  {:<12} {:>9} {:>7} {:>14}",
        "name", "dtype", "non_null", "unique", "missing_share"
    );
    for row in &rows {
        println!(
            "{:<name_width$}  {:<12} {:>9} {:>7} {:>14}",
            row.name,
            row.dtype.to_string(),
            row.non_null,
            row.unique,
            fmt_value(row.missing_share)
        );
    }

    println!();
    println!("{}", "Missing values:".bold());
    for (name, entry) in missing.iter() {
        println!(
            "  {:<name_width$}  {} ({})",
            name,
            entry.missing_count,
            fmt_value(entry.missing_share)
        );
    }

    println!();
    let score = format!("{:.2}", flags.quality_score);
    let score = if flags.quality_score >= 0.9 {
        score.green()
    } else if flags.quality_score >= 0.7 {
        score.yellow()
    } else {
        score.red()
    };
    println!("{} {}", "Quality score:".bold(), score);
    for (name, triggered) in flags.flags() {
        if triggered {
            println!("  {} {}", "flag:".yellow(), name);
        }
    }

    Ok(())
}
