//! Keyword set loading and matching
//!
//! Keywords are read one per line, trimmed and lower-cased. A blank line
//! yields the empty keyword, which is a substring of every column name and
//! therefore flags every table; callers opt out with `skip_blank`.

use crate::domain::{PiiScoutError, Result};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// Normalized set of sensitivity-indicating terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

impl KeywordSet {
    /// Builds a set from individual terms
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = terms.into_iter().map(|t| normalize(t.as_ref())).collect();
        Self { keywords }
    }

    /// Parses newline-delimited text
    pub fn parse(text: &str, skip_blank: bool) -> Self {
        let keywords = text
            .lines()
            .map(normalize)
            .filter(|k| !(skip_blank && k.is_empty()))
            .collect();
        Self { keywords }
    }

    /// Reads newline-delimited keywords from any reader
    ///
    /// # Errors
    ///
    /// Returns [`PiiScoutError::Keywords`] if the source cannot be read or is
    /// not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R, skip_blank: bool) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| PiiScoutError::Keywords(format!("Failed to read keyword list: {e}")))?;
        Ok(Self::parse(&text, skip_blank))
    }

    /// Loads the keyword list from a file
    ///
    /// # Errors
    ///
    /// Returns [`PiiScoutError::Keywords`] if the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>, skip_blank: bool) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PiiScoutError::Keywords(format!(
                "Failed to read keyword list {}: {}",
                path.display(),
                e
            ))
        })?;

        let keywords = Self::parse(&text, skip_blank);
        tracing::debug!(
            path = %path.display(),
            count = keywords.len(),
            has_blank = keywords.contains_blank(),
            "Loaded keyword list"
        );
        Ok(keywords)
    }

    /// True iff any keyword is a case-insensitive substring of `column_name`
    pub fn matches(&self, column_name: &str) -> bool {
        self.first_match(column_name).is_some()
    }

    /// The first keyword (in sorted order) contained in `column_name`
    pub fn first_match(&self, column_name: &str) -> Option<&str> {
        let column = column_name.to_lowercase();
        self.keywords
            .iter()
            .find(|k| column.contains(k.as_str()))
            .map(String::as_str)
    }

    /// Whether the empty keyword is part of the set
    pub fn contains_blank(&self) -> bool {
        self.keywords.contains("")
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set has no keywords at all
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterates keywords in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let keywords = KeywordSet::parse("  SSN \nEmail\r\nphone\n", false);
        assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["email", "phone", "ssn"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let keywords = KeywordSet::parse("email\nEMAIL\n email\n", false);
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_blank_lines_kept_by_default() {
        let keywords = KeywordSet::parse("ssn\n\nemail", false);
        assert!(keywords.contains_blank());
        assert!(keywords.matches("created_at"));
    }

    #[test]
    fn test_blank_lines_skipped_on_request() {
        let keywords = KeywordSet::parse("ssn\n   \nemail", true);
        assert!(!keywords.contains_blank());
        assert!(!keywords.matches("created_at"));
    }

    #[test]
    fn test_substring_match() {
        let keywords = KeywordSet::new(["name"]);
        assert!(keywords.matches("username"));
        assert!(keywords.matches("FirstName"));
        assert!(!keywords.matches("id"));
    }

    #[test]
    fn test_first_match() {
        let keywords = KeywordSet::new(["ssn", "email"]);
        assert_eq!(keywords.first_match("user_email"), Some("email"));
        assert_eq!(keywords.first_match("event"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ssn\nemail").unwrap();
        file.flush().unwrap();

        let keywords = KeywordSet::load(file.path(), false).unwrap();
        assert_eq!(keywords.len(), 2);
        assert!(!keywords.contains_blank());
    }

    #[test]
    fn test_load_missing_file() {
        let err = KeywordSet::load("does-not-exist-keywords.txt", false).unwrap_err();
        assert!(matches!(err, PiiScoutError::Keywords(_)));
    }

    #[test]
    fn test_from_reader() {
        let keywords = KeywordSet::from_reader("dob\naddress\n".as_bytes(), false).unwrap();
        assert!(keywords.matches("home_address"));
    }
}
