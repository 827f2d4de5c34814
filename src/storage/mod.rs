//! Document store abstraction and backends.
//!
//! Each scanned document's aggregate is checkpointed to the store before the
//! reduction phase reads everything back. The trait keeps the reducer
//! independent of the backing representation; the filesystem backend writes
//! gzip-compressed CSV, the memory backend backs the tests.

use crate::aggregate::DocumentAggregate;
use crate::error::Result;

/// Columns of an intermediate per-document table, in order.
pub const STORE_COLUMNS: [&str; 3] = ["word", "total", "sentences"];

/// File extension for intermediate tables: CSV compressed with gzip.
pub const STORE_EXTENSION: &str = "csv.gz";

/// A store of per-document aggregates keyed by document identifier.
pub trait DocumentStore: Send + Sync {
    /// Persist one document's aggregate.
    fn save(&self, doc_id: &str, aggregate: &DocumentAggregate) -> Result<()>;

    /// Load every stored aggregate with its document identifier.
    fn load_all(&self) -> Result<Vec<(String, DocumentAggregate)>>;
}

pub mod file;
pub mod memory;

pub use file::FileDocumentStore;
pub use memory::MemoryDocumentStore;
