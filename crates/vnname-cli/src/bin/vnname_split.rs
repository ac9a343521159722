// vnname-split: Split Vietnamese full names into family, middle and given parts.
//
// Reads one full name per line and writes a TSV table, a JSON array of
// records and a log of blank or suspicious lines.
//
// Usage:
//   vnname-split [--input FILE] [--output FILE] [--json FILE] [--log FILE] [--names FILE]
//
// Set RUST_LOG=debug to trace every split line on stderr.

use std::path::PathBuf;

use clap::Parser;
use vnname_core::run::{
    DEFAULT_INPUT, DEFAULT_JSON_OUTPUT, DEFAULT_LOG, DEFAULT_NAMES, DEFAULT_TSV_OUTPUT,
    SplitConfig, split_file,
};

/// Parse Vietnamese names into family, middle, and given parts.
#[derive(Parser)]
#[command(name = "vnname-split")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file, one full name per line
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// TSV output file
    #[arg(long, default_value = DEFAULT_TSV_OUTPUT)]
    output: PathBuf,

    /// JSON output file
    #[arg(long, default_value = DEFAULT_JSON_OUTPUT)]
    json: PathBuf,

    /// Log file for empty lines and warnings
    #[arg(long, default_value = DEFAULT_LOG)]
    log: PathBuf,

    /// JSON dictionary of common names
    #[arg(long, env = vnname_cli::NAMES_ENV, default_value = DEFAULT_NAMES)]
    names: PathBuf,
}

impl From<Args> for SplitConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            json: args.json,
            log: args.log,
            names: args.names,
        }
    }
}

fn main() {
    vnname_cli::init_tracing();
    let config = SplitConfig::from(Args::parse());

    let summary = split_file(&config).unwrap_or_else(|e| vnname_cli::fatal(&e.to_string()));

    println!(
        "Parsed {} names from {} lines ({} flagged, {} empty)",
        summary.records, summary.lines, summary.warnings, summary.empty_lines
    );
    println!("TSV saved to: {}", config.output.display());
    println!("JSON saved to: {}", config.json.display());
    println!("Log saved to: {}", config.log.display());
}
