//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and keeps only
//! word tokens: segments made entirely of alphanumeric characters or
//! underscore. Punctuation runs like `...`, `.` or `!` form their own
//! segments under UAX #29 and are discarded, so `continued...` yields the
//! single token `continued`.
//!
//! # Examples
//!
//! ```
//! use gleaner::analysis::tokenizer::Tokenizer;
//! use gleaner::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Only segments in which every character is alphanumeric or `_` survive;
/// anything containing punctuation is dropped rather than trimmed.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Check whether a segment is a word token.
    fn is_word(segment: &str) -> bool {
        !segment.is_empty()
            && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bounds()
            .filter(|segment| Self::is_word(segment))
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
