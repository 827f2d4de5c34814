//! Stop filter implementation.
//!
//! Removes stopwords from the token stream. Matching is case-sensitive: the
//! English list is all lowercase, so a capitalized word is never removed
//! even when its lowercase form is a stopword. The per-document aggregator
//! lowercases sentences before tokenizing, so the quirk only shows on
//! mixed-case input fed to the analyzer directly.
//!
//! # Examples
//!
//! ```
//! use gleaner::analysis::token_filter::TokenFilter;
//! use gleaner::analysis::token_filter::stop::StopFilter;
//! use gleaner::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the", "and"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// The word set is supplied by the caller; the canonical English list lives
/// in the resource cache (see [`crate::resource`]).
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove.
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the given stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use gleaner::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word. Case-sensitive.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
