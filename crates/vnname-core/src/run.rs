// Run driver for the name splitter
//
// One linear pass over the input: every line bumps the line counter, blank
// lines are logged and skipped, every other line becomes exactly one record
// (TSV row now, JSON array at the end) plus at most one log entry.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dictionary::NameDictionary;
use crate::lines::Lines;
use crate::record::{NameRecord, TSV_HEADER};
use crate::splitter::split_name;
use crate::{NameError, Result};

pub const DEFAULT_INPUT: &str = "vietnamese_names.txt";
pub const DEFAULT_TSV_OUTPUT: &str = "names_parsed.tsv";
pub const DEFAULT_JSON_OUTPUT: &str = "names_parsed.json";
pub const DEFAULT_LOG: &str = "issues.log";
pub const DEFAULT_NAMES: &str = "common_names.json";

/// File locations for one splitter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Full names, one per line.
    pub input: PathBuf,
    /// TSV output.
    pub output: PathBuf,
    /// JSON output.
    pub json: PathBuf,
    /// Warnings log.
    pub log: PathBuf,
    /// Name dictionary (JSON).
    pub names: PathBuf,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_TSV_OUTPUT),
            json: PathBuf::from(DEFAULT_JSON_OUTPUT),
            log: PathBuf::from(DEFAULT_LOG),
            names: PathBuf::from(DEFAULT_NAMES),
        }
    }
}

/// Counts collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// All input lines, blank ones included.
    pub lines: usize,
    pub records: usize,
    pub empty_lines: usize,
    /// Records that produced a warning.
    pub warnings: usize,
}

/// Split every line of `reader`.
///
/// Lines end at "\n", "\r\n" or a lone "\r". Writes the TSV header and one
/// row per record to `tsv`, and one entry per blank or flagged line to `log`.
/// Returns the records in input order.
/// Read failures, invalid UTF-8 included, surface as [`NameError::Read`].
pub fn split_lines<R, T, L>(
    dictionary: &NameDictionary,
    reader: R,
    mut tsv: T,
    mut log: L,
) -> Result<(Vec<NameRecord>, RunSummary)>
where
    R: BufRead,
    T: Write,
    L: Write,
{
    let mut records = Vec::new();
    let mut summary = RunSummary::default();

    writeln!(tsv, "{TSV_HEADER}")?;

    for (index, line) in Lines::new(reader).enumerate() {
        let line = line.map_err(NameError::Read)?;
        let line_number = index + 1;
        summary.lines = line_number;

        let clean_line = line.text.trim();
        if clean_line.is_empty() {
            writeln!(log, "Line {line_number}: Empty line")?;
            summary.empty_lines += 1;
            continue;
        }

        let outcome = split_name(clean_line, dictionary);
        let warning = outcome.warning_message();
        let record = NameRecord::new(line_number, outcome.name);
        writeln!(tsv, "{}", record.tsv_row())?;
        tracing::debug!(
            line = line_number,
            family = %record.family,
            middle = %record.middle,
            given = %record.given,
            "split name"
        );

        if let Some(warning) = warning {
            writeln!(log, "Line {line_number}: '{clean_line}' \u{2014} {warning}")?;
            tracing::debug!(line = line_number, %warning, "flagged name");
            summary.warnings += 1;
        }

        records.push(record);
    }

    summary.records = records.len();
    tsv.flush()?;
    log.flush()?;
    Ok((records, summary))
}

/// Write `records` as a pretty-printed JSON array (2-space indent,
/// non-ASCII characters kept literal).
pub fn write_json<W: Write>(records: &[NameRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| NameError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Run the splitter over files.
///
/// The input is checked and the dictionary loaded before any output file is
/// created, so those failures leave existing outputs untouched.
pub fn split_file(config: &SplitConfig) -> Result<RunSummary> {
    if !config.input.is_file() {
        return Err(NameError::InputNotFound(config.input.clone()));
    }
    let dictionary = NameDictionary::load(&config.names)?;

    let input = File::open(&config.input).map_err(|source| NameError::Io {
        path: config.input.clone(),
        source,
    })?;
    let tsv = create(&config.output)?;
    let json = create(&config.json)?;
    let log = create(&config.log)?;

    let (records, summary) = split_lines(&dictionary, BufReader::new(input), tsv, log)
        .map_err(|e| e.with_input_path(&config.input))?;
    write_json(&records, json)?;

    tracing::info!(
        lines = summary.lines,
        records = summary.records,
        empty_lines = summary.empty_lines,
        warnings = summary.warnings,
        "name split complete"
    );
    Ok(summary)
}
