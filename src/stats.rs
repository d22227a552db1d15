//! Summary figures describing a tag cloud run.

use serde::{Deserialize, Serialize};

use crate::counter::WordCounts;
use crate::rank::RankedWord;

/// Counts captured while building a cloud.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudStats {
    /// Non-empty sanitized tokens in the document.
    pub total_tokens: usize,
    /// Tokens left after removing common words.
    pub taggable_tokens: usize,
    /// Distinct taggable words.
    pub distinct_words: usize,
    /// Words kept in the cloud.
    pub selected: usize,
    /// Largest group among the kept words, `None` for an empty cloud.
    pub max_group: Option<usize>,
}

impl CloudStats {
    /// Derives the statistics from the counting pass and the final selection.
    #[must_use]
    pub fn collect(counts: &WordCounts, words: &[RankedWord]) -> Self {
        Self {
            total_tokens: counts.total_tokens(),
            taggable_tokens: counts.taggable_tokens(),
            distinct_words: counts.len(),
            selected: words.len(),
            max_group: words.iter().map(|word| word.group).max(),
        }
    }
}
