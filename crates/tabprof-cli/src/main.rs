//! tabprof CLI - dataset profiling and quality scoring.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let loader = commands::loader_options(cli.delimiter, cli.max_rows);

    let result = match cli.command {
        Commands::Overview { file } => commands::overview::run(file, loader, cli.format),

        Commands::Correlation { file } => commands::correlation::run(file, loader, cli.format),

        Commands::Categories {
            file,
            max_columns,
            top_k,
        } => commands::categories::run(file, loader, max_columns, top_k, cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
