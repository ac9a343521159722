//! Vietnamese name utilities.
//!
//! Two independent tools over line-delimited name lists:
//!
//! - [`accent`] -- strip diacritics via NFKD decomposition and removal of
//!   combining marks
//! - [`splitter`] -- split a full name into family, middle and given parts
//!   using a [`dictionary::NameDictionary`] of known family names and
//!   compound given names
//!
//! # Architecture
//!
//! - [`accent`] -- accent removal, per string and per file
//! - [`dictionary`] -- name dictionary loading (JSON)
//! - [`lines`] -- line reader splitting on "\n", "\r\n" and lone "\r"
//! - [`splitter`] -- the per-line splitting heuristic and its warnings
//! - [`record`] -- output record type and TSV row formatting
//! - [`run`] -- run driver writing TSV, JSON and the warnings log

use std::path::{Path, PathBuf};

pub mod accent;
pub mod dictionary;
pub mod lines;
pub mod record;
pub mod run;
pub mod splitter;

/// Error type for dictionary loading and file processing.
///
/// Per-line anomalies are never errors; they surface as
/// [`splitter::NameWarning`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read name dictionary {}: {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed name dictionary {}: {source}", .path.display())]
    DictionaryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading from an input stream failed (including invalid UTF-8).
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl NameError {
    /// Attach the input file path to a stream read failure.
    pub(crate) fn with_input_path(self, path: &Path) -> Self {
        match self {
            NameError::Read(source) => NameError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

/// Result type alias for name processing operations.
pub type Result<T> = std::result::Result<T, NameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_names_the_path() {
        let err = NameError::InputNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "input file not found: missing.txt");
    }

    #[test]
    fn dictionary_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = NameError::DictionaryParse {
            path: PathBuf::from("common_names.json"),
            source,
        };
        assert!(
            err.to_string()
                .starts_with("malformed name dictionary common_names.json")
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn read_failure_gets_input_path() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err = NameError::Read(source).with_input_path(Path::new("names.txt"));
        assert!(matches!(err, NameError::Io { ref path, .. } if path == Path::new("names.txt")));
        assert_eq!(err.to_string(), "I/O error on names.txt: bad utf-8");
    }

    #[test]
    fn write_failure_keeps_its_variant() {
        let source = std::io::Error::other("disk full");
        let err = NameError::Write(source).with_input_path(Path::new("names.txt"));
        assert_eq!(err.to_string(), "failed to write output: disk full");
    }
}
