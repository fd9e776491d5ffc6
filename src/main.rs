//! ecocounts - CSV to counts.json generator
//!
//! Usage: `ecocounts /path/to/acteurs.csv [--output data/counts.json]`

use anyhow::{Context, Result};
use clap::Parser;
use ecocounts::logging::init_tracing;
use ecocounts::{Aggregator, RunConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecocounts")]
#[command(about = "Generate per-category counts.json from the actors CSV export", long_about = None)]
struct Cli {
    /// Path to the actors CSV file
    input: PathBuf,

    /// Output file (defaults to data/counts.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level when ECOCOUNTS_LOG is unset
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = RunConfig::new(cli.input, cli.output);
    let aggregation = Aggregator::default()
        .run(&config)
        .with_context(|| format!("counting actors from {}", config.input.display()))?;

    println!(
        "Generated {} ({} categories, {} rows)",
        config.output.display(),
        aggregation.document.national.len(),
        aggregation.document.meta.total_input_rows
    );
    Ok(())
}
