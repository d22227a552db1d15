//! End-to-end pipeline turning a document into a rendered tag cloud.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{CloudBuilder, CloudConfig};
use crate::counter::{count_words, WordCounts};
use crate::document::read_document;
use crate::error::Result;
use crate::rank::{select_top, RankedWord};
use crate::render::render_html;
use crate::stats::CloudStats;
use crate::stopwords::StopwordSet;

/// High-level façade running sanitize, count, rank, and group over a document.
#[derive(Debug, Clone)]
pub struct Pipeline {
    cfg: CloudConfig,
    stopwords: StopwordSet,
}

/// Words selected for display, in alphabetical order, with run statistics.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCloud {
    words: Vec<RankedWord>,
    stats: CloudStats,
}

impl Pipeline {
    /// Creates a pipeline from an already loaded stopword set.
    #[must_use]
    pub fn new(cfg: CloudConfig, stopwords: StopwordSet) -> Self {
        Self { cfg, stopwords }
    }

    /// Validates `cfg` and loads its common-word list (the bundled one unless
    /// [`CloudConfig::ignore_file`] is set).
    pub fn from_config(cfg: CloudConfig) -> Result<Self> {
        cfg.validate()?;
        let stopwords = match &cfg.ignore_file {
            Some(path) => StopwordSet::from_path(path)?,
            None => StopwordSet::bundled(),
        };
        debug!("using {} common words", stopwords.len());
        Ok(Self::new(cfg, stopwords))
    }

    /// Returns a [`CloudBuilder`] with default settings.
    #[must_use]
    pub fn builder() -> CloudBuilder {
        CloudConfig::builder()
    }

    /// Returns an immutable reference to the underlying configuration.
    #[must_use]
    pub fn config(&self) -> &CloudConfig {
        &self.cfg
    }

    /// Returns the common words excluded by this pipeline.
    #[must_use]
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Counts the taggable words of `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> WordCounts {
        count_words(text, |word| self.stopwords.is_taggable(word))
    }

    /// Builds a cloud of the `top` most frequent taggable words of `text`.
    pub fn generate(&self, text: &str, top: usize) -> Result<TagCloud> {
        let counts = self.count(text);
        let words = select_top(&counts, top, self.cfg.group_size)?;
        let stats = CloudStats::collect(&counts, &words);
        info!(
            "tag cloud ready: tokens={} taggable={} distinct={} selected={}",
            stats.total_tokens, stats.taggable_tokens, stats.distinct_words, stats.selected
        );
        Ok(TagCloud { words, stats })
    }

    /// Reads the document at `path` and builds its cloud.
    pub fn generate_from_path<P: AsRef<Path>>(&self, path: P, top: usize) -> Result<TagCloud> {
        let path = path.as_ref();
        let text = read_document(path)?;
        debug!("read {} bytes from {}", text.len(), path.display());
        self.generate(&text, top)
    }

    /// Renders `cloud` with this pipeline's configuration.
    #[must_use]
    pub fn render(&self, cloud: &TagCloud) -> String {
        cloud.render_html(&self.cfg)
    }
}

impl TagCloud {
    /// Selected words in alphabetical order.
    #[must_use]
    pub fn words(&self) -> &[RankedWord] {
        &self.words
    }

    /// Statistics gathered while building the cloud.
    #[must_use]
    pub fn stats(&self) -> &CloudStats {
        &self.stats
    }

    /// Returns `true` when no word was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Renders the cloud as a complete HTML page.
    #[must_use]
    pub fn render_html(&self, cfg: &CloudConfig) -> String {
        render_html(&self.words, cfg)
    }

    /// Serializes the cloud to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
