//! Common-word lists excluded from tag clouds.

use std::fs;
use std::path::Path;

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{Result, TagCloudError};
use crate::sanitize::{read_words, sanitize};

/// File name of the default common-word list shipped with the crate.
pub const DEFAULT_IGNORE_FILE: &str = "common.txt";

const BUNDLED_COMMON_WORDS: &str = include_str!("../references/common.txt");

/// Immutable set of sanitized words that never appear in a tag cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Creates a set that excludes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a whitespace- or line-delimited word list.
    ///
    /// Every entry goes through [`sanitize`] so that lookups match document tokens.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(read_words(text))
    }

    /// Builds a set from individual words, sanitizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| sanitize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Returns the English list embedded from `references/common.txt`.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_COMMON_WORDS)
    }

    /// Loads a word list from disk. A missing file is an error, never an empty set.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).map_err(|err| TagCloudError::io(err, Some(path.to_path_buf())))?;
        let set = Self::from_text(&String::from_utf8_lossy(&bytes));
        debug!("loaded {} common words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Returns `true` when `word` is non-empty and not a common word.
    #[must_use]
    pub fn is_taggable(&self, word: &str) -> bool {
        !word.is_empty() && !self.words.contains(word)
    }

    /// Returns `true` when `word` is in the set.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct common words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the set excludes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entries_are_sanitized_on_insert() {
        let set = StopwordSet::from_text("The\nA,\n  \"Of\"  \n\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("a"));
        assert!(set.contains("of"));
    }

    #[test]
    fn empty_words_are_never_taggable() {
        let set = StopwordSet::empty();
        assert!(!set.is_taggable(""));
        assert!(set.is_taggable("cat"));
    }

    #[test]
    fn stopwords_are_not_taggable() {
        let set = StopwordSet::from_words(["the", "a"]);
        assert!(!set.is_taggable("the"));
        assert!(!set.is_taggable("a"));
        assert!(set.is_taggable("mat"));
    }

    #[test]
    fn bundled_list_covers_articles() {
        let set = StopwordSet::bundled();
        assert!(!set.is_empty());
        for word in ["the", "a", "of", "and", "don't"] {
            assert!(set.contains(word), "{word} should be bundled");
        }
    }

    #[test]
    fn from_path_reads_word_list() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_IGNORE_FILE);
        fs::write(&path, "alpha beta\ngamma\n").expect("write list");
        let set = StopwordSet::from_path(&path).expect("load list");
        assert_eq!(set.len(), 3);
        assert!(set.contains("beta"));
    }

    #[test]
    fn from_path_missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let err = StopwordSet::from_path(dir.path().join("missing.txt"))
            .expect_err("missing list must fail");
        assert!(matches!(err, TagCloudError::Io { .. }));
    }
}
