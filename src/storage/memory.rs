//! In-memory document store.
//!
//! Preserves save order on load, which makes it the backend of choice for
//! exercising reducer enumeration-order properties in tests.

use std::sync::Mutex;

use crate::aggregate::DocumentAggregate;
use crate::error::Result;
use crate::storage::DocumentStore;

/// A document store keeping aggregates in memory, in save order.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    tables: Mutex<Vec<(String, DocumentAggregate)>>,
}

impl MemoryDocumentStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        MemoryDocumentStore::default()
    }

    /// The number of stored aggregates.
    pub fn len(&self) -> usize {
        self.tables.lock().expect("store lock poisoned").len()
    }

    /// Whether the store holds no aggregates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn save(&self, doc_id: &str, aggregate: &DocumentAggregate) -> Result<()> {
        let mut tables = self.tables.lock().expect("store lock poisoned");
        if let Some(slot) = tables.iter_mut().find(|(id, _)| id == doc_id) {
            slot.1 = aggregate.clone();
        } else {
            tables.push((doc_id.to_string(), aggregate.clone()));
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<(String, DocumentAggregate)>> {
        Ok(self.tables.lock().expect("store lock poisoned").clone())
    }
}
