//! Top-K selection and frequency grouping.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::counter::WordCounts;
use crate::error::{Result, TagCloudError};

/// A selected word and the size group its frequency falls into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedWord {
    /// Sanitized word text.
    pub word: String,
    /// Size group; `0` is the smallest rendered size.
    pub group: usize,
}

impl RankedWord {
    /// Creates a ranked entry.
    #[must_use]
    pub fn new<S: Into<String>>(word: S, group: usize) -> Self {
        Self {
            word: word.into(),
            group,
        }
    }
}

/// Orders every counted word from most to least frequent, breaking ties alphabetically.
#[must_use]
pub fn rank_by_frequency(counts: &WordCounts) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts
        .iter()
        .map(|(word, count)| (word.to_owned(), count))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Keeps the `top` most frequent words, assigns each the group `count / group_size`, and returns
/// them in alphabetical order.
///
/// Fails when `top` exceeds the number of distinct words or when `group_size` is zero.
pub fn select_top(counts: &WordCounts, top: usize, group_size: usize) -> Result<Vec<RankedWord>> {
    if group_size == 0 {
        return Err(TagCloudError::InvalidConfig(
            "group_size must be greater than zero".into(),
        ));
    }
    let available = counts.len();
    if top > available {
        return Err(TagCloudError::SelectionOutOfRange {
            requested: top,
            available,
        });
    }

    let mut ranked = rank_by_frequency(counts);
    ranked.truncate(top);
    debug!("top {top} words by frequency: {ranked:?}");

    let mut grouped: Vec<RankedWord> = ranked
        .into_iter()
        .map(|(word, count)| RankedWord::new(word, count / group_size))
        .collect();
    grouped.sort_unstable_by(|a, b| a.word.cmp(&b.word));
    Ok(grouped)
}
