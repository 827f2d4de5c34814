//! # Gleaner
//!
//! Find the most common words across a directory of text documents.
//!
//! ## Pipeline
//!
//! - Per-document tokenization and counting with example-sentence capture
//! - Gzip-compressed CSV checkpoints, one per document
//! - A fold of all checkpoints into one cumulative, word-keyed table
//! - A ranked `result.csv` of words at or above the occurrence threshold

pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod reduce;
pub mod report;
pub mod resource;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
