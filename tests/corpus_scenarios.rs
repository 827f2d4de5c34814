//! Reducer scenarios driven through the aggregator and the in-memory store.

use std::collections::HashSet;

use gleaner::aggregate::DocumentAggregator;
use gleaner::analysis::TextAnalyzer;
use gleaner::reduce::reduce;
use gleaner::report::finalize;
use gleaner::storage::{DocumentStore, MemoryDocumentStore};

fn stop_words() -> HashSet<String> {
    ["i", "a", "the", "it", "is", "if", "im", "saw", "like", "me"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn aggregator() -> DocumentAggregator {
    DocumentAggregator::new(TextAnalyzer::english(stop_words(), false))
}

#[test]
fn test_two_documents_contributing_the_same_word() {
    let aggregator = aggregator();
    let store = MemoryDocumentStore::new();

    let doc1 = aggregator.aggregate("dog dog dog dog\n".as_bytes()).unwrap();
    let doc2 = aggregator.aggregate("dog dog\n".as_bytes()).unwrap();
    store.save("doc1", &doc1).unwrap();
    store.save("doc2", &doc2).unwrap();

    let table = reduce(store.load_all().unwrap());
    let dog = table.get("dog").unwrap();

    assert_eq!(dog.total, 6);
    assert_eq!(dog.docs, "doc1,doc2");
    assert_eq!(dog.sentences, "dog dog dog dog\ndog dog");
}

#[test]
fn test_totals_commute_across_store_orders() {
    let aggregator = aggregator();

    let text1 = "The black cat hunts.\nA dog barks, dog dog!\n";
    let text2 = "One cat naps. Another cat naps.\n";

    let forward = MemoryDocumentStore::new();
    forward
        .save("doc1", &aggregator.aggregate(text1.as_bytes()).unwrap())
        .unwrap();
    forward
        .save("doc2", &aggregator.aggregate(text2.as_bytes()).unwrap())
        .unwrap();

    let backward = MemoryDocumentStore::new();
    backward
        .save("doc2", &aggregator.aggregate(text2.as_bytes()).unwrap())
        .unwrap();
    backward
        .save("doc1", &aggregator.aggregate(text1.as_bytes()).unwrap())
        .unwrap();

    let forward_table = reduce(forward.load_all().unwrap());
    let backward_table = reduce(backward.load_all().unwrap());

    for word in ["cat", "dog", "naps", "hunts", "barks"] {
        assert_eq!(
            forward_table.get(word).map(|r| r.total),
            backward_table.get(word).map(|r| r.total),
            "total for {word:?} must not depend on enumeration order"
        );
    }
}

#[test]
fn test_contraction_words_flow_to_the_report() {
    let aggregator = aggregator();
    let store = MemoryDocumentStore::new();

    let text = "I don't know.\nI don't care.\nDon't stop me now.\n";
    store
        .save("doc1", &aggregator.aggregate(text.as_bytes()).unwrap())
        .unwrap();

    let records = finalize(reduce(store.load_all().unwrap()), 3);
    let dont = records.iter().find(|r| r.word == "dont").unwrap();

    assert_eq!(dont.total, 3);
    assert_eq!(
        dont.sentences,
        "i don't know.\ni don't care.\ndon't stop me now."
    );
}

#[test]
fn test_report_orders_unequal_totals_descending() {
    let aggregator = aggregator();
    let store = MemoryDocumentStore::new();

    let text = "turtle turtle turtle turtle turtle\nbird bird bird bird\ndog dog\n";
    store
        .save("doc1", &aggregator.aggregate(text.as_bytes()).unwrap())
        .unwrap();

    let records = finalize(reduce(store.load_all().unwrap()), 0);
    let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();

    assert_eq!(words, vec!["turtle", "bird", "dog"]);
}
