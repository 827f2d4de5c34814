//! Sentence segmentation.
//!
//! Splits a unit of text into sentences using Unicode sentence boundary
//! rules (UAX #29), which handle abbreviation-adjacent periods, closing
//! quotes and exclamation runs better than splitting on `.`.
//!
//! # Examples
//!
//! ```
//! use gleaner::analysis::segmenter::SentenceSegmenter;
//!
//! let segmenter = SentenceSegmenter::new();
//! let sentences = segmenter.segment("I saw a cat. The cat saw me!");
//!
//! assert_eq!(sentences, vec!["I saw a cat.", "The cat saw me!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences on UAX #29 sentence boundaries.
///
/// Each returned sentence is trimmed of surrounding whitespace; segments
/// that are empty after trimming are dropped.
#[derive(Clone, Debug, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new sentence segmenter.
    pub fn new() -> Self {
        SentenceSegmenter
    }

    /// Split `text` into trimmed, non-empty sentence strings.
    pub fn segment(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(|sentence| sentence.trim())
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| sentence.to_string())
            .collect()
    }
}
