//! Command line argument parsing for the gleaner CLI using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    Config, DEFAULT_DOCS_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_RESOURCES_PATH, DEFAULT_THRESHOLD,
    DEFAULT_TRANSIT_PATH,
};

/// Gleaner - find the most common words across a directory of text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "gleaner")]
#[command(about = "Find the most common words across a directory of text documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GleanerArgs {
    /// Directory of documents to process
    #[arg(short, long, default_value = DEFAULT_DOCS_PATH, value_name = "DIR")]
    pub docs_path: PathBuf,

    /// Transit directory for intermediate per-document tables (wiped each run)
    #[arg(long, default_value = DEFAULT_TRANSIT_PATH, value_name = "DIR")]
    pub transit_path: PathBuf,

    /// Directory the final result.csv is written into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, value_name = "DIR")]
    pub output_path: PathBuf,

    /// Directory for cached linguistic resources (stopword list)
    #[arg(long, default_value = DEFAULT_RESOURCES_PATH, value_name = "DIR")]
    pub resources_path: PathBuf,

    /// Minimum cumulative occurrences for a word to be reported (inclusive)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u64,

    /// Keep stopwords in the counts instead of filtering them out
    #[arg(long)]
    pub include_stopwords: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl GleanerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the run configuration from the parsed arguments.
    pub fn to_config(&self) -> Config {
        Config::new()
            .with_docs_path(&self.docs_path)
            .with_transit_path(&self.transit_path)
            .with_output_path(&self.output_path)
            .with_resources_path(&self.resources_path)
            .with_threshold(self.threshold)
            .with_include_stopwords(self.include_stopwords)
    }
}
