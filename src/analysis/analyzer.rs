//! Analyzer facade combining char filters, a tokenizer, and token filters.
//!
//! [`TextAnalyzer`] is the single entry point the aggregator uses: it splits
//! text into sentences, turns a sentence into its distinct word tokens, and
//! counts whole-word occurrences of a token within a sentence.
//!
//! # Examples
//!
//! ```
//! use gleaner::analysis::analyzer::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::english(["the", "a"].iter().map(|s| s.to_string()).collect(), false);
//! let words = analyzer.words("I don't know the answer").unwrap();
//!
//! assert!(words.contains(&"dont".to_string()));
//! assert!(!words.contains(&"the".to_string()));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::char_filter::{CharFilter, ContractionCharFilter};
use crate::analysis::segmenter::SentenceSegmenter;
use crate::analysis::token_filter::{StopFilter, TokenFilter};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::{GleanerError, Result};

/// A configurable analyzer that combines a tokenizer with filter chains.
///
/// Processing order for [`words`](TextAnalyzer::words):
/// 1. Char filters normalize the sentence text (contraction stripping).
/// 2. The tokenizer splits it on word boundaries.
/// 3. Token filters run in the order they were added (stopword removal).
#[derive(Clone)]
pub struct TextAnalyzer {
    segmenter: SentenceSegmenter,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl TextAnalyzer {
    /// Create a new analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        TextAnalyzer {
            segmenter: SentenceSegmenter::new(),
            char_filters: Vec::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// The canonical English pipeline: contraction stripping, Unicode word
    /// tokenization, and (unless `include_stopwords`) case-sensitive
    /// stopword removal against `stop_words`.
    pub fn english(stop_words: HashSet<String>, include_stopwords: bool) -> Self {
        let mut analyzer = TextAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_char_filter(Arc::new(ContractionCharFilter::new()));

        if !include_stopwords {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::with_stop_words(stop_words)));
        }

        analyzer
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Split `text` into sentences. Sentence detection is UAX #29 based and
    /// does not run the char or token filters.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// The distinct word tokens of `sentence`, in first-seen order.
    pub fn words(&self, sentence: &str) -> Result<Vec<String>> {
        let normalized = self.normalize(sentence);

        let mut tokens = self.tokenizer.tokenize(&normalized)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for token in tokens {
            if seen.insert(token.text.clone()) {
                words.push(token.text);
            }
        }

        Ok(words)
    }

    /// Count whole-word occurrences of `word` within `sentence`.
    ///
    /// The sentence is normalized through the char filters first, so a
    /// contraction token like `dont` matches its occurrence in `don't`.
    pub fn count_in(&self, word: &str, sentence: &str) -> Result<u64> {
        let normalized = self.normalize(sentence);
        let pattern = format!(r"\b{}\b", regex::escape(word));
        let re = Regex::new(&pattern)
            .map_err(|e| GleanerError::analysis(format!("bad word pattern {pattern:?}: {e}")))?;

        Ok(re.find_iter(&normalized).count() as u64)
    }

    /// Apply the char filters to `text` in order.
    fn normalize(&self, text: &str) -> String {
        let mut filtered = text.to_string();
        for char_filter in &self.char_filters {
            filtered = char_filter.filter(&filtered);
        }
        filtered
    }
}
