//! Word frequency accumulation.

use rustc_hash::FxHashMap;

use crate::sanitize::read_words;

/// Occurrence counts for taggable words together with token totals for the pass that built them.
///
/// Iteration order is unspecified; ranking imposes an explicit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: FxHashMap<String, usize>,
    total_tokens: usize,
    taggable_tokens: usize,
}

impl WordCounts {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        self.total_tokens += 1;
        self.taggable_tokens += 1;
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    /// Returns the count for `word`, if it was seen.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no word was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Non-empty sanitized tokens seen, including filtered ones.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Tokens that passed the taggable predicate.
    #[must_use]
    pub fn taggable_tokens(&self) -> usize {
        self.taggable_tokens
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (word, count) in iter {
            if count == 0 {
                continue;
            }
            *counts.counts.entry(word.into()).or_insert(0) += count;
            counts.total_tokens += count;
            counts.taggable_tokens += count;
        }
        counts
    }
}

/// Counts every sanitized token of `text` accepted by `is_taggable`.
///
/// Empty tokens are skipped before the predicate runs. Empty input produces empty counts.
pub fn count_words<F>(text: &str, is_taggable: F) -> WordCounts
where
    F: Fn(&str) -> bool,
{
    let mut counts = WordCounts::new();
    for word in read_words(text).filter(|word| !word.is_empty()) {
        if is_taggable(&word) {
            counts.record(&word);
        } else {
            counts.total_tokens += 1;
        }
    }
    counts
}
