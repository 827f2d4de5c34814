//! Run configuration.
//!
//! Every component receives its paths and thresholds from a [`Config`]
//! constructed at startup; there are no module-level path globals. Defaults
//! match the CLI's documented defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory of source documents.
pub const DEFAULT_DOCS_PATH: &str = "docs";

/// Default transit directory for intermediate per-document tables.
pub const DEFAULT_TRANSIT_PATH: &str = "processed";

/// Default output directory for the final report.
pub const DEFAULT_OUTPUT_PATH: &str = "result";

/// Default directory for cached linguistic resources.
pub const DEFAULT_RESOURCES_PATH: &str = "resources";

/// Default minimum cumulative total for a word to appear in the report.
pub const DEFAULT_THRESHOLD: u64 = 20;

/// Configuration for one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory of source text documents, one document per file.
    pub docs_path: PathBuf,

    /// Transit directory; wiped and recreated at the start of each run.
    pub transit_path: PathBuf,

    /// Directory the final `result.csv` is written into.
    pub output_path: PathBuf,

    /// Directory of cached linguistic resources (stopword list).
    pub resources_path: PathBuf,

    /// Occurrence threshold, inclusive.
    pub threshold: u64,

    /// Keep stopwords in the counts instead of filtering them out.
    pub include_stopwords: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            docs_path: PathBuf::from(DEFAULT_DOCS_PATH),
            transit_path: PathBuf::from(DEFAULT_TRANSIT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            resources_path: PathBuf::from(DEFAULT_RESOURCES_PATH),
            threshold: DEFAULT_THRESHOLD,
            include_stopwords: false,
        }
    }
}

impl Config {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the source documents directory.
    pub fn with_docs_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.docs_path = path.into();
        self
    }

    /// Set the transit directory.
    pub fn with_transit_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.transit_path = path.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the resource cache directory.
    pub fn with_resources_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.resources_path = path.into();
        self
    }

    /// Set the occurrence threshold.
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set whether stopwords are kept in the counts.
    pub fn with_include_stopwords(mut self, include: bool) -> Self {
        self.include_stopwords = include;
        self
    }
}
