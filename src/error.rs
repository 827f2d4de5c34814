//! Error types for the gleaner library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`GleanerError`] enum. There is no retry or partial-recovery logic
//! anywhere in the pipeline: every error propagates to the caller and aborts
//! the run.
//!
//! # Examples
//!
//! ```
//! use gleaner::error::{GleanerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GleanerError::storage("missing column"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for gleaner operations.
#[derive(Error, Debug)]
pub enum GleanerError {
    /// I/O errors (opening, reading, or writing files). Decode errors on
    /// non-UTF-8 document bytes surface here as `InvalidData`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV serialization/deserialization errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Analysis errors (sentence segmentation, tokenization, counting).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Document store errors (malformed intermediate files, bad columns).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Linguistic resource errors (stopword cache missing or unreadable).
    #[error("Resource error: {0}")]
    Resource(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`GleanerError`].
pub type Result<T> = std::result::Result<T, GleanerError>;

impl GleanerError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GleanerError::Analysis(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        GleanerError::Storage(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        GleanerError::Resource(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GleanerError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GleanerError::Other(msg.into())
    }
}
