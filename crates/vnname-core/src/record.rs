// Parsed name record written to the TSV and JSON outputs

use serde::{Deserialize, Serialize};

use crate::splitter::SplitName;

/// Header row of the TSV output.
pub const TSV_HEADER: &str = "Family\tMiddle\tGiven";

/// One parsed, non-empty input line.
///
/// `line` is the 1-based line number in the input file, counting blank
/// lines too. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub line: usize,
    pub family: String,
    pub middle: String,
    pub given: String,
}

impl NameRecord {
    pub fn new(line: usize, name: SplitName) -> Self {
        Self {
            line,
            family: name.family,
            middle: name.middle,
            given: name.given,
        }
    }

    /// The record as a tab-separated row, without the line terminator.
    pub fn tsv_row(&self) -> String {
        format!("{}\t{}\t{}", self.family, self.middle, self.given)
    }
}
