//! Command-line front end for batch dataset redaction.
//!
//! Reads a CSV with `record_id` and `data_json` columns, redacts each row's
//! payload, and writes `record_id`, `redacted_data_json`, `is_pii` to the
//! output file. Exits nonzero when the input cannot be read or the output
//! cannot be written.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod pipeline;

/// Scans a tabular dataset for PII and writes a redacted copy.
#[derive(Debug, Parser)]
#[command(name = "piimask", version, about)]
struct Args {
    /// Input CSV with `record_id` and `data_json` columns.
    input: PathBuf,

    /// Where the redacted dataset is written.
    #[arg(short, long, default_value = "redacted_output.csv")]
    output: PathBuf,

    /// Suppress the run summary line.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let summary = pipeline::run(&args.input, &args.output)
        .with_context(|| format!("failed to redact {}", args.input.display()))?;

    info!(
        rows = summary.rows,
        pii_rows = summary.pii_rows,
        output = %args.output.display(),
        "redacted dataset written"
    );
    Ok(())
}
