//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tabprof: dataset profiling and quality scoring
#[derive(Parser)]
#[command(name = "tabprof")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Field delimiter (default: auto-detect)
    #[arg(short, long, global = true)]
    pub delimiter: Option<char>,

    /// Maximum rows to read
    #[arg(long, global = true)]
    pub max_rows: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a file: column summaries, missing values, quality score
    Overview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Pearson correlation matrix over numeric columns
    Correlation {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Most frequent values for non-numeric columns
    Categories {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum number of columns to report
        #[arg(long, default_value = "10")]
        max_columns: usize,

        /// Number of top values per column
        #[arg(long, default_value = "5")]
        top_k: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
