//! Configuration builders controlling grouping and HTML rendering.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagCloudError};

/// Configuration for building and rendering a tag cloud.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CloudConfig {
    /// Number of size classes emitted in the page stylesheet.
    pub num_groups: usize,
    /// Font size (pt) of group 0.
    pub min_font: usize,
    /// Font size step (pt) between consecutive groups.
    pub increment: usize,
    /// Divisor turning a word count into its group.
    pub group_size: usize,
    /// Page title written into the HTML header.
    pub title: String,
    /// Common-word list replacing the bundled one; `None` uses `references/common.txt`.
    pub ignore_file: Option<PathBuf>,
}

impl CloudConfig {
    /// Returns a builder initialised with [`CloudConfig::default`].
    #[must_use]
    pub fn builder() -> CloudBuilder {
        CloudBuilder::default()
    }

    /// Loads a configuration from a JSON file; missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw =
            fs::read_to_string(path).map_err(|err| TagCloudError::io(err, Some(path.into())))?;
        let cfg: Self = serde_json::from_str(&raw)?;
        Ok(cfg)
    }

    /// Validates the invariants required for grouping and rendering.
    pub fn validate(&self) -> Result<()> {
        if self.group_size == 0 {
            return Err(TagCloudError::InvalidConfig(
                "group_size must be greater than zero".into(),
            ));
        }
        if self.num_groups == 0 {
            return Err(TagCloudError::InvalidConfig(
                "num_groups must be greater than zero".into(),
            ));
        }
        if self.min_font == 0 {
            return Err(TagCloudError::InvalidConfig(
                "min_font must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            num_groups: 20,
            min_font: 6,
            increment: 4,
            group_size: 20,
            title: "Tag Cloud".into(),
            ignore_file: None,
        }
    }
}

/// Builder for [`CloudConfig`].
#[derive(Debug, Default, Clone)]
pub struct CloudBuilder {
    cfg: CloudConfig,
}

impl CloudBuilder {
    /// Creates a builder with [`CloudConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one loaded from JSON.
    #[must_use]
    pub fn from_config(cfg: CloudConfig) -> Self {
        Self { cfg }
    }

    /// Sets the number of stylesheet size classes.
    #[must_use]
    pub fn num_groups(mut self, value: usize) -> Self {
        self.cfg.num_groups = value;
        self
    }

    /// Sets the font size of the smallest group.
    #[must_use]
    pub fn min_font(mut self, value: usize) -> Self {
        self.cfg.min_font = value;
        self
    }

    /// Sets the font size step between groups.
    #[must_use]
    pub fn increment(mut self, value: usize) -> Self {
        self.cfg.increment = value;
        self
    }

    /// Sets the count divisor used for grouping.
    #[must_use]
    pub fn group_size(mut self, value: usize) -> Self {
        self.cfg.group_size = value;
        self
    }

    /// Sets the page title.
    #[must_use]
    pub fn title<S: Into<String>>(mut self, value: S) -> Self {
        self.cfg.title = value.into();
        self
    }

    /// Replaces the bundled common-word list with a file on disk.
    #[must_use]
    pub fn ignore_file<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.cfg.ignore_file = path.map(Into::into);
        self
    }

    /// Finalises the builder, returning a validated [`CloudConfig`].
    pub fn build(self) -> Result<CloudConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
