//! Word-frequency tag cloud library and CLI.
//!
//! The crate exposes both a library API and a `tagcloud` command line interface for turning a
//! text document into a static HTML page whose font sizes track word frequency.  Typical usage
//! builds a [`Pipeline`] from a [`CloudConfig`], generates a [`TagCloud`] for the most frequent
//! words, and renders it.
//!
//! ```no_run
//! use tagcloud::{CloudConfig, Pipeline};
//!
//! # fn main() -> tagcloud::Result<()> {
//! let cfg = CloudConfig::builder().group_size(4).min_font(8).build()?;
//! let pipeline = Pipeline::from_config(cfg)?;
//! let cloud = pipeline.generate_from_path("/path/to/document.txt", 50)?;
//! println!("{}", pipeline.render(&cloud));
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature.  Users targeting the
//! library portion only can disable default features to avoid the CLI
//! dependencies: `tagcloud = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

pub mod cloud;
pub mod config;
pub mod counter;
pub mod document;
pub mod error;
pub mod rank;
pub mod render;
pub mod sanitize;
pub mod stats;
pub mod stopwords;

pub use cloud::{Pipeline, TagCloud};
pub use config::{CloudBuilder, CloudConfig};
pub use counter::{count_words, WordCounts};
pub use error::{Result, TagCloudError};
pub use rank::{select_top, RankedWord};
pub use render::render_html;
pub use sanitize::{read_words, sanitize};
pub use stats::CloudStats;
pub use stopwords::StopwordSet;
