//! Corpus reduction: folding per-document aggregates into one table.
//!
//! The accumulator is a word-keyed table built in a single pass over the
//! stored aggregates. For each word: totals sum, sentence blobs concatenate
//! with a newline, and contributing document ids concatenate with a comma.
//! A word that never appears is absent, never zero.
//!
//! Totals are commutative and associative across enumeration orders;
//! `docs`/`sentences` ordering follows the order aggregates are folded in.
//!
//! # Examples
//!
//! ```
//! use gleaner::aggregate::{DocumentAggregate, WordRecord};
//! use gleaner::reduce::reduce;
//!
//! let doc = DocumentAggregate::from_records(vec![WordRecord {
//!     word: "dog".to_string(),
//!     total: 4,
//!     sentences: vec!["dog dog dog dog".to_string()],
//! }]);
//!
//! let table = reduce(vec![("doc1".to_string(), doc)]);
//! let records = table.into_records();
//! assert_eq!(records[0].word, "dog");
//! assert_eq!(records[0].total, 4);
//! assert_eq!(records[0].docs, "doc1");
//! ```

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::aggregate::DocumentAggregate;

/// Cross-document merged counts, sentence union, and document attribution
/// for one word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// The word.
    pub word: String,

    /// Comma-joined document identifiers that contain the word, in
    /// merge-encounter order. Duplicates are possible if the same document
    /// is folded twice; retained quirk.
    pub docs: String,

    /// Sum of per-document totals.
    pub total: u64,

    /// Newline-joined sentence blobs from each contributing document.
    /// Duplicate sentences across documents are not de-duplicated here;
    /// de-duplication happens only within a single document's own scan.
    pub sentences: String,
}

/// The running accumulator table of the reduction fold, keyed by word with
/// first-encounter order preserved.
#[derive(Debug, Default)]
pub struct CorpusTable {
    order: Vec<String>,
    records: HashMap<String, CorpusRecord>,
}

impl CorpusTable {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        CorpusTable::default()
    }

    /// The number of distinct words accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the accumulated record for `word`.
    pub fn get(&self, word: &str) -> Option<&CorpusRecord> {
        self.records.get(word)
    }

    /// Fold one document's aggregate into the accumulator.
    pub fn fold(&mut self, doc_id: &str, aggregate: &DocumentAggregate) {
        for record in aggregate.iter() {
            let blob = record.sentences.join("\n");
            match self.records.get_mut(&record.word) {
                Some(merged) => {
                    merged.total += record.total;
                    merged.docs.push(',');
                    merged.docs.push_str(doc_id);
                    merged.sentences.push('\n');
                    merged.sentences.push_str(&blob);
                }
                None => {
                    self.order.push(record.word.clone());
                    self.records.insert(
                        record.word.clone(),
                        CorpusRecord {
                            word: record.word.clone(),
                            docs: doc_id.to_string(),
                            total: record.total,
                            sentences: blob,
                        },
                    );
                }
            }
        }
    }

    /// Consume the table, yielding records in first-encounter order.
    pub fn into_records(mut self) -> Vec<CorpusRecord> {
        self.order
            .drain(..)
            .filter_map(|word| self.records.remove(&word))
            .collect()
    }
}

/// Reduce a sequence of per-document aggregates into one cumulative table.
pub fn reduce<I>(aggregates: I) -> CorpusTable
where
    I: IntoIterator<Item = (String, DocumentAggregate)>,
{
    let mut table = CorpusTable::new();
    for (doc_id, aggregate) in aggregates {
        debug!("folding {} words from {doc_id}", aggregate.len());
        table.fold(&doc_id, &aggregate);
    }
    table
}
