// vnname-unaccent: Strip Vietnamese diacritics from a text file.
//
// Every line is NFKD-decomposed and its combining marks dropped, so
// "Trần Thị Thu Hà" becomes "Tran Thi Thu Ha". Line count, order and line
// endings are preserved.
//
// Usage:
//   vnname-unaccent [--input FILE] [--output FILE]

use std::path::PathBuf;

use clap::Parser;
use vnname_core::accent::convert_file;

const DEFAULT_INPUT: &str = "names_parsed.tsv";
const DEFAULT_OUTPUT: &str = "names_western.tsv";

/// Convert Vietnamese text to its closest unaccented equivalent.
#[derive(Parser)]
#[command(name = "vnname-unaccent")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input text file
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output text file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    vnname_cli::init_tracing();
    let args = Args::parse();

    let lines = convert_file(&args.input, &args.output)
        .unwrap_or_else(|e| vnname_cli::fatal(&e.to_string()));

    println!(
        "Converted {lines} lines, written to: {}",
        args.output.display()
    );
}
