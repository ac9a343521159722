// Name dictionary: known family names, middle names and compound given names

use std::path::Path;

use hashbrown::HashSet;
use serde::Deserialize;

use crate::{NameError, Result};

/// On-disk layout of the dictionary file. Missing keys default to empty lists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DictionaryFile {
    family_names: Vec<String>,
    middle_names: Vec<String>,
    compound_given_names: Vec<String>,
}

/// Sets of known name parts, loaded once and immutable for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDictionary {
    family_names: HashSet<String>,
    /// Loaded for completeness; the splitter does not consult it.
    middle_names: HashSet<String>,
    compound_given_names: HashSet<String>,
}

impl NameDictionary {
    /// Build a dictionary from plain lists. Duplicates collapse.
    pub fn from_lists<F, M, C>(family_names: F, middle_names: M, compound_given_names: C) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            family_names: family_names.into_iter().map(Into::into).collect(),
            middle_names: middle_names.into_iter().map(Into::into).collect(),
            compound_given_names: compound_given_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        Ok(Self::from_lists(
            file.family_names,
            file.middle_names,
            file.compound_given_names,
        ))
    }

    /// Load a dictionary from a JSON file.
    ///
    /// A missing or unreadable file and malformed JSON are both fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| NameError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_json_str(&json).map_err(|source| NameError::DictionaryParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            family_names = dictionary.family_names.len(),
            middle_names = dictionary.middle_names.len(),
            compound_given_names = dictionary.compound_given_names.len(),
            "loaded name dictionary"
        );
        Ok(dictionary)
    }

    pub fn is_family_name(&self, name: &str) -> bool {
        self.family_names.contains(name)
    }

    pub fn is_middle_name(&self, name: &str) -> bool {
        self.middle_names.contains(name)
    }

    /// Check whether a two-token phrase (joined by one space) is a known
    /// compound given name.
    pub fn is_compound_given_name(&self, phrase: &str) -> bool {
        self.compound_given_names.contains(phrase)
    }

    pub fn family_names(&self) -> &HashSet<String> {
        &self.family_names
    }

    pub fn middle_names(&self) -> &HashSet<String> {
        &self.middle_names
    }

    pub fn compound_given_names(&self) -> &HashSet<String> {
        &self.compound_given_names
    }
}
