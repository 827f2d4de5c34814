//! Contraction char filter.
//!
//! Removes apostrophe-like characters that sit between two word characters,
//! so contractions tokenize as a single word: `don't` becomes `dont`,
//! `L'Apostrophe` becomes `LApostrophe`. Quotes at word edges (opening or
//! closing quotation marks) are left alone and handled by the tokenizer.
//!
//! # Examples
//!
//! ```
//! use gleaner::analysis::char_filter::CharFilter;
//! use gleaner::analysis::char_filter::contraction::ContractionCharFilter;
//!
//! let filter = ContractionCharFilter::new();
//! assert_eq!(filter.filter("I don't know"), "I dont know");
//! ```

use crate::analysis::char_filter::CharFilter;

/// Apostrophe-like characters stripped inside words.
const QUOTE_CHARS: &[char] = &['\'', '\u{2019}', '`', '"'];

/// A char filter that deletes quote characters flanked by word characters.
#[derive(Clone, Debug, Default)]
pub struct ContractionCharFilter;

impl ContractionCharFilter {
    /// Create a new contraction char filter.
    pub fn new() -> Self {
        ContractionCharFilter
    }

    /// Word characters in the tokenizer's sense: alphanumerics or underscore.
    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl CharFilter for ContractionCharFilter {
    fn filter(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut output = String::with_capacity(input.len());

        for (i, &c) in chars.iter().enumerate() {
            let inside_word = QUOTE_CHARS.contains(&c)
                && i > 0
                && Self::is_word_char(chars[i - 1])
                && chars.get(i + 1).is_some_and(|&next| Self::is_word_char(next));
            if !inside_word {
                output.push(c);
            }
        }

        output
    }

    fn name(&self) -> &'static str {
        "contraction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_apostrophe() {
        let filter = ContractionCharFilter::new();
        assert_eq!(filter.filter("don't"), "dont");
        assert_eq!(filter.filter("it's food"), "its food");
    }

    #[test]
    fn test_curly_apostrophe_and_backtick() {
        let filter = ContractionCharFilter::new();
        assert_eq!(filter.filter("don\u{2019}t"), "dont");
        assert_eq!(filter.filter("L`Apostrophe"), "LApostrophe");
    }

    #[test]
    fn test_quote_at_word_edges_kept() {
        let filter = ContractionCharFilter::new();
        assert_eq!(filter.filter("'hello'"), "'hello'");
        assert_eq!(filter.filter("he said \"yes\""), "he said \"yes\"");
        assert_eq!(filter.filter("rock' n roll"), "rock' n roll");
    }

    #[test]
    fn test_consecutive_contractions() {
        let filter = ContractionCharFilter::new();
        assert_eq!(filter.filter("I'll eat 2004's"), "Ill eat 2004s");
        assert_eq!(filter.filter("a'b'c"), "abc");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ContractionCharFilter::new().name(), "contraction");
    }
}
