//! Text analysis module for gleaner.
//!
//! This module turns raw document text into countable word tokens through a
//! pipeline of sentence segmentation, character-level normalization, word
//! tokenization, and token filtering.

pub mod analyzer;
pub mod char_filter;
pub mod segmenter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::TextAnalyzer;
pub use char_filter::CharFilter;
pub use segmenter::SentenceSegmenter;
pub use token::{Token, TokenStream};
pub use token_filter::TokenFilter;
pub use tokenizer::Tokenizer;
