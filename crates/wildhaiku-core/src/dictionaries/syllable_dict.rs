//! Pronunciation-backed syllable dictionary.
//!
//! Loads a CMU-style pronouncing dictionary, one entry per line:
//!
//! ```text
//! haiku HH AY1 K UW0
//! hello HH AH0 L OW1
//! ```
//!
//! A word's syllable count is the number of phonemes carrying a stress digit,
//! since only vowel nuclei are stress-marked. The dictionary is built once and
//! never mutated, so a single instance can be shared across worker threads
//! behind an [`Arc`](std::sync::Arc).

use std::collections::HashMap;

use camino::Utf8Path;

use crate::error::{DictionaryError, DictionaryResult};

/// Marker the dictionary uses for comment lines.
const COMMENT_PREFIX: &str = ";;;";

/// Mapping from lowercase word to syllable count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableDictionary {
    entries: HashMap<String, usize>,
}

impl SyllableDictionary {
    /// Load a dictionary file from disk.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> DictionaryResult<Self> {
        let bytes = std::fs::read(path.as_std_path()).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_bytes(path, &bytes)?;
        tracing::info!(entries = dictionary.len(), "syllable dictionary loaded");
        Ok(dictionary)
    }

    /// Build a dictionary from in-memory text.
    pub fn parse_str(source: &str) -> Self {
        let mut dictionary = Self::default();
        for line in source.lines() {
            dictionary.insert_line(line);
        }
        dictionary
    }

    fn from_bytes(path: &Utf8Path, bytes: &[u8]) -> DictionaryResult<Self> {
        let mut dictionary = Self::default();
        for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            let line = std::str::from_utf8(raw).map_err(|e| DictionaryError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                reason: e.to_string(),
            })?;
            dictionary.insert_line(line);
        }
        Ok(dictionary)
    }

    fn insert_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return;
        }
        // Newer releases append `# comment` annotations after the phonemes.
        let line = line.split_once(" #").map_or(line, |(entry, _)| entry);

        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            return;
        };
        // Repeated words are not disambiguated; the last entry wins.
        self.entries
            .insert(word.to_lowercase(), count_stressed_phonemes(fields));
    }

    /// Syllable count for `word`, ignoring case.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    /// Whether `word` has a usable entry.
    ///
    /// Entries recorded with zero syllables come from malformed lines and are
    /// treated as absent.
    pub fn has_entry(&self, word: &str) -> bool {
        self.lookup(word).is_some_and(|count| count > 0)
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count phonemes that contain a stress digit.
pub fn count_stressed_phonemes<'a>(phonemes: impl IntoIterator<Item = &'a str>) -> usize {
    phonemes
        .into_iter()
        .filter(|phoneme| phoneme.chars().any(|c| c.is_ascii_digit()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn counts_stress_marked_phonemes() {
        assert_eq!(count_stressed_phonemes(["HH", "AY1", "K", "UW0"]), 2);
        assert_eq!(count_stressed_phonemes(["DH", "AH0"]), 1);
        assert_eq!(count_stressed_phonemes(std::iter::empty()), 0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = SyllableDictionary::parse_str("haiku HH AY1 K UW0\nTHE DH AH0\n");
        assert_eq!(dict.lookup("haiku"), Some(2));
        assert_eq!(dict.lookup("HAIKU"), Some(2));
        assert_eq!(dict.lookup("The"), Some(1));
        assert_eq!(dict.lookup("sonnet"), None);
    }

    #[test]
    fn last_duplicate_wins() {
        let dict = SyllableDictionary::parse_str("fire F AY1 R\nfire F AY1 ER0\n");
        assert_eq!(dict.lookup("fire"), Some(2));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn zero_syllable_entries_are_not_usable() {
        let dict = SyllableDictionary::parse_str("hmm\nbroken HH M\n");
        assert_eq!(dict.lookup("broken"), Some(0));
        assert!(!dict.has_entry("broken"));
        assert!(!dict.has_entry("hmm"));
        assert!(!dict.has_entry("missing"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let source = ";;; # CMUdict  --  Major Version: 0.07\n\nabkhazian AE0 B K AA1 Z IY0 AH0 N # place, old\n";
        let dict = SyllableDictionary::parse_str(source);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup("abkhazian"), Some(4));
    }

    #[test]
    fn tolerates_double_space_separator() {
        let dict = SyllableDictionary::parse_str("HELLO  HH AH0 L OW1\r\n");
        assert_eq!(dict.lookup("hello"), Some(2));
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cmudict.dict");
        fs::write(&path, "test T EH1 S T\ntesting T EH1 S T IH0 NG\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let dict = SyllableDictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lookup("testing"), Some(2));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = SyllableDictionary::load(Utf8Path::new("/definitely/not/here.dict"));
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn load_rejects_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.dict");
        fs::write(&path, b"ok OW2 K EY1\n\xff\xfe B AE1 D\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let err = SyllableDictionary::load(&path).unwrap_err();
        assert!(matches!(err, DictionaryError::Parse { line: 2, .. }));
    }
}
