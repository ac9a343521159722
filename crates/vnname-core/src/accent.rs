// Accent removal
//
// NFKD separates tone and vowel marks from their base letters; every
// character with a non-zero canonical combining class is then dropped.
// Letters without a decomposition (đ, Đ) pass through unchanged.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use crate::lines::Lines;
use crate::{NameError, Result};

/// Check whether a character is a combining mark (canonical combining
/// class other than zero).
#[inline]
pub fn is_combining(c: char) -> bool {
    canonical_combining_class(c) != 0
}

/// Remove all diacritics from `text`.
///
/// The result is idempotent: `remove_accents(&remove_accents(s))` equals
/// `remove_accents(s)` for every input.
pub fn remove_accents(text: &str) -> String {
    text.nfkd().filter(|&c| !is_combining(c)).collect()
}

/// Remove accents from every line of `reader`, writing to `writer`.
///
/// Lines end at "\n", "\r\n" or a lone "\r"; each terminator is copied as
/// it appears, so the output has the same line count and order as the input.
/// Returns the number of lines written.
pub fn convert_lines<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize> {
    let mut count = 0;
    for line in Lines::new(reader) {
        let line = line.map_err(NameError::Read)?;
        writer.write_all(remove_accents(&line.text).as_bytes())?;
        writer.write_all(line.ending.as_bytes())?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Remove accents from the file at `input`, writing the result to `output`.
///
/// The output file is only created once the input is known to exist.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    if !input.is_file() {
        return Err(NameError::InputNotFound(input.to_path_buf()));
    }
    let infile = File::open(input).map_err(|source| NameError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let outfile = File::create(output).map_err(|source| NameError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let lines = convert_lines(BufReader::new(infile), BufWriter::new(outfile))
        .map_err(|e| e.with_input_path(input))?;
    tracing::info!(lines, output = %output.display(), "accents removed");
    Ok(lines)
}
