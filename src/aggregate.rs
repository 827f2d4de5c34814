//! Per-document aggregation.
//!
//! Consumes one document's text and produces a [`DocumentAggregate`]: for
//! every distinct word, its total occurrence count and the set of distinct
//! sentences containing it.
//!
//! The document is read line by line. Sentences are detected within each
//! line independently, so a sentence split across a line break is not
//! reassembled. Accepted limitation.
//!
//! # Examples
//!
//! ```
//! use gleaner::aggregate::DocumentAggregator;
//! use gleaner::analysis::TextAnalyzer;
//! use std::collections::HashSet;
//!
//! let analyzer = TextAnalyzer::english(HashSet::new(), true);
//! let aggregator = DocumentAggregator::new(analyzer);
//!
//! let aggregate = aggregator.aggregate("cat cat dog".as_bytes()).unwrap();
//! let cat = aggregate.get("cat").unwrap();
//! assert_eq!(cat.total, 2);
//! assert_eq!(cat.sentences, vec!["cat cat dog"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::analysis::TextAnalyzer;
use crate::error::Result;

/// Per-word counts and example sentences within a single document.
///
/// `total` counts every occurrence, so it can exceed the sentence-set size
/// when a word repeats within one sentence. The sentence set is
/// de-duplicated and kept in first-seen order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The word, lowercased and contraction-stripped.
    pub word: String,

    /// Total occurrences of the word across all sentences in the document.
    pub total: u64,

    /// Distinct lowercased sentences containing the word.
    pub sentences: Vec<String>,
}

/// The aggregate of one document: one [`WordRecord`] per distinct word, in
/// first-encounter order. Immutable once written to the document store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAggregate {
    records: Vec<WordRecord>,
}

impl DocumentAggregate {
    /// Build an aggregate from word records.
    pub fn from_records(records: Vec<WordRecord>) -> Self {
        DocumentAggregate { records }
    }

    /// The number of distinct words in the document.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document produced no qualifying words.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the word records in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.iter()
    }

    /// Look up the record for `word`.
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.records.iter().find(|r| r.word == word)
    }
}

impl IntoIterator for DocumentAggregate {
    type Item = WordRecord;
    type IntoIter = std::vec::IntoIter<WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Scans one document and accumulates per-word totals and sentence sets.
#[derive(Clone)]
pub struct DocumentAggregator {
    analyzer: TextAnalyzer,
}

impl DocumentAggregator {
    /// Create an aggregator that tokenizes with the given analyzer.
    pub fn new(analyzer: TextAnalyzer) -> Self {
        DocumentAggregator { analyzer }
    }

    /// Aggregate a document's text into per-word records.
    ///
    /// Lines that are not valid UTF-8 abort the run: the decode error
    /// propagates as an I/O error, the document is neither retried nor
    /// skipped.
    pub fn aggregate<R: BufRead>(&self, reader: R) -> Result<DocumentAggregate> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, u64> = HashMap::new();
        let mut sentence_sets: HashMap<String, (Vec<String>, HashSet<String>)> = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            for sentence in self.analyzer.sentences(&line) {
                let sentence = sentence.to_lowercase();
                for word in self.analyzer.words(&sentence)? {
                    let count = self.analyzer.count_in(&word, &sentence)?;

                    if !totals.contains_key(&word) {
                        order.push(word.clone());
                    }
                    *totals.entry(word.clone()).or_insert(0) += count;

                    let (sentences, seen) = sentence_sets.entry(word).or_default();
                    if seen.insert(sentence.clone()) {
                        sentences.push(sentence.clone());
                    }
                }
            }
        }

        let records = order
            .into_iter()
            .map(|word| {
                let total = totals[&word];
                let (sentences, _) = sentence_sets.remove(&word).unwrap_or_default();
                WordRecord {
                    word,
                    total,
                    sentences,
                }
            })
            .collect();

        Ok(DocumentAggregate::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator(include_stopwords: bool) -> DocumentAggregator {
        let stop_words = ["i", "a", "the", "like", "me", "saw", "black", "doesnt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        DocumentAggregator::new(TextAnalyzer::english(stop_words, include_stopwords))
    }

    #[test]
    fn test_cat_scenario() {
        let doc = "I saw a black cat.\nI saw a cat\nThe cat doesnt like me.\n";
        let aggregate = aggregator(false).aggregate(doc.as_bytes()).unwrap();

        let cat = aggregate.get("cat").unwrap();
        assert_eq!(cat.total, 3);
        assert_eq!(
            cat.sentences,
            vec![
                "i saw a black cat.",
                "i saw a cat",
                "the cat doesnt like me."
            ]
        );
    }

    #[test]
    fn test_repeat_within_sentence_inflates_total() {
        let doc = "dog dog dog dog\n";
        let aggregate = aggregator(false).aggregate(doc.as_bytes()).unwrap();

        let dog = aggregate.get("dog").unwrap();
        assert_eq!(dog.total, 4);
        assert_eq!(dog.sentences, vec!["dog dog dog dog"]);
    }

    #[test]
    fn test_empty_document() {
        let aggregate = aggregator(false).aggregate("".as_bytes()).unwrap();
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_punctuation_only_document() {
        let aggregate = aggregator(false).aggregate("... !!! ???\n".as_bytes()).unwrap();
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_total_sum_matches_per_sentence_counts() {
        let doc = "The cat saw the cat.\nA dog barked twice, dog dog!\n";
        let agg = aggregator(true);
        let aggregate = agg.aggregate(doc.as_bytes()).unwrap();

        let mut expected_sum = 0;
        for line in doc.lines() {
            for sentence in agg.analyzer.sentences(line) {
                let sentence = sentence.to_lowercase();
                for word in agg.analyzer.words(&sentence).unwrap() {
                    expected_sum += agg.analyzer.count_in(&word, &sentence).unwrap();
                }
            }
        }

        let actual_sum: u64 = aggregate.iter().map(|r| r.total).sum();
        assert_eq!(actual_sum, expected_sum);
    }

    #[test]
    fn test_idempotence() {
        let doc = "I saw a black cat.\nThe cat doesnt like me.\n";
        let agg = aggregator(false);

        let first = agg.aggregate(doc.as_bytes()).unwrap();
        let second = agg.aggregate(doc.as_bytes()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let bytes: &[u8] = &[0x66, 0x6f, 0x6f, 0xff, 0xfe, 0x0a];
        let result = aggregator(false).aggregate(bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_contraction_word_counted() {
        let doc = "I don't know.\n";
        let aggregate = aggregator(false).aggregate(doc.as_bytes()).unwrap();

        let dont = aggregate.get("dont").unwrap();
        assert_eq!(dont.total, 1);
        assert_eq!(dont.sentences, vec!["i don't know."]);
    }
}
