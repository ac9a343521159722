// Name splitting heuristic
//
// A Vietnamese full name is written family name first and given name last.
// Everything in between is the middle name, except that a known two-token
// compound given name ("Thu Hà") is kept together at the end.

use std::fmt;

use crate::dictionary::NameDictionary;

/// Names with more tokens than this are flagged as unusually long.
pub const MAX_USUAL_PARTS: usize = 4;

/// Minimum token count for the compound given name lookahead.
pub const COMPOUND_LOOKAHEAD_MIN_PARTS: usize = 4;

/// The three positional components of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitName {
    pub family: String,
    pub middle: String,
    pub given: String,
}

impl SplitName {
    pub fn new(
        family: impl Into<String>,
        middle: impl Into<String>,
        given: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            middle: middle.into(),
            given: given.into(),
        }
    }
}

/// A non-fatal anomaly found while splitting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameWarning {
    /// Fewer than two tokens.
    TooFewParts,
    /// The first token of a 3+ token name is not a known family name.
    UnrecognizedFamilyName(String),
    /// More than [`MAX_USUAL_PARTS`] tokens; carries the token count.
    UnusuallyLong(usize),
}

impl fmt::Display for NameWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameWarning::TooFewParts => f.write_str("Too few parts"),
            NameWarning::UnrecognizedFamilyName(family) => {
                write!(f, "Unrecognized family name: {family}")
            }
            NameWarning::UnusuallyLong(parts) => {
                write!(f, "Unusually long name ({parts} parts)")
            }
        }
    }
}

/// Result of splitting one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutcome {
    pub name: SplitName,
    /// In detection order: family name check first, then length.
    pub warnings: Vec<NameWarning>,
}

impl SplitOutcome {
    /// The combined warning message, parts joined by `"; "`, or `None`
    /// when the line raised no warning.
    pub fn warning_message(&self) -> Option<String> {
        if self.warnings.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.warnings.iter().map(ToString::to_string).collect();
        Some(parts.join("; "))
    }
}

/// Split a full name into family, middle and given parts.
///
/// Never fails: anything unexpected degrades to a warning.
pub fn split_name(name: &str, dictionary: &NameDictionary) -> SplitOutcome {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let count = parts.len();

    match count {
        0 | 1 => SplitOutcome {
            name: SplitName::new(parts.first().copied().unwrap_or(""), "", ""),
            warnings: vec![NameWarning::TooFewParts],
        },
        // Two-token names are accepted without checking the family name.
        2 => SplitOutcome {
            name: SplitName::new(parts[0], "", parts[1]),
            warnings: Vec::new(),
        },
        _ => {
            let family = parts[0];
            let mut given = parts[count - 1].to_string();
            let mut middle = parts[1..count - 1].join(" ");

            if count >= COMPOUND_LOOKAHEAD_MIN_PARTS {
                let last_two = parts[count - 2..].join(" ");
                if dictionary.is_compound_given_name(&last_two) {
                    given = last_two;
                    middle = parts[1..count - 2].join(" ");
                }
            }

            let mut warnings = Vec::new();
            if !dictionary.is_family_name(family) {
                warnings.push(NameWarning::UnrecognizedFamilyName(family.to_string()));
            }
            if count > MAX_USUAL_PARTS {
                warnings.push(NameWarning::UnusuallyLong(count));
            }

            SplitOutcome {
                name: SplitName::new(family, middle, given),
                warnings,
            }
        }
    }
}
