//! Filesystem-backed document store.
//!
//! One gzip-compressed CSV table per document, named
//! `<doc_id>.csv.gz`, with columns `word,total,sentences`. The `sentences`
//! column holds the document's distinct sentences for that word joined by
//! newlines inside a single quoted field.
//!
//! `load_all` enumerates the directory in sorted document-id order so the
//! reducer's `docs`/`sentences` output is deterministic across filesystems.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::debug;

use crate::aggregate::{DocumentAggregate, WordRecord};
use crate::error::{GleanerError, Result};
use crate::storage::{DocumentStore, STORE_COLUMNS, STORE_EXTENSION};

/// A document store writing one compressed table per document into a
/// transit directory.
#[derive(Clone, Debug)]
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    /// Create a store over an existing transit directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        FileDocumentStore { dir: dir.into() }
    }

    /// The transit directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self, doc_id: &str) -> PathBuf {
        self.dir.join(format!("{doc_id}.{STORE_EXTENSION}"))
    }

    fn load_table(&self, path: &Path) -> Result<DocumentAggregate> {
        let file = File::open(path)?;
        let decoder = GzDecoder::new(file);
        let mut reader = ReaderBuilder::new().from_reader(decoder);

        let headers = reader.headers()?.clone();
        let columns: Vec<&str> = headers.iter().collect();
        if columns != STORE_COLUMNS {
            return Err(GleanerError::storage(format!(
                "malformed intermediate table {}: expected columns {:?}, found {:?}",
                path.display(),
                STORE_COLUMNS,
                columns
            )));
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let word = row
                .get(0)
                .ok_or_else(|| {
                    GleanerError::storage(format!("missing word column in {}", path.display()))
                })?
                .to_string();
            let total: u64 = row
                .get(1)
                .ok_or_else(|| {
                    GleanerError::storage(format!("missing total column in {}", path.display()))
                })?
                .parse()
                .map_err(|e| {
                    GleanerError::storage(format!(
                        "bad total for word {:?} in {}: {}",
                        word,
                        path.display(),
                        e
                    ))
                })?;
            let sentences: Vec<String> = row
                .get(2)
                .ok_or_else(|| {
                    GleanerError::storage(format!("missing sentences column in {}", path.display()))
                })?
                .split('\n')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();

            records.push(WordRecord {
                word,
                total,
                sentences,
            });
        }

        Ok(DocumentAggregate::from_records(records))
    }
}

impl DocumentStore for FileDocumentStore {
    fn save(&self, doc_id: &str, aggregate: &DocumentAggregate) -> Result<()> {
        let path = self.table_path(doc_id);
        debug!("writing intermediate table {}", path.display());

        let file = File::create(&path)?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut writer = WriterBuilder::new().from_writer(encoder);

        writer.write_record(STORE_COLUMNS)?;
        for record in aggregate.iter() {
            let total = record.total.to_string();
            let sentences = record.sentences.join("\n");
            writer.write_record([record.word.as_str(), total.as_str(), sentences.as_str()])?;
        }

        writer.flush()?;
        let encoder = writer.into_inner().map_err(|e| {
            GleanerError::storage(format!("failed to finish table {}: {}", path.display(), e))
        })?;
        encoder.finish()?;

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<(String, DocumentAggregate)>> {
        let suffix = format!(".{STORE_EXTENSION}");
        let mut entries: Vec<(String, PathBuf)> = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(doc_id) = name.strip_suffix(&suffix) {
                entries.push((doc_id.to_string(), entry.path()));
            }
        }

        // Sorted so report attribution order does not depend on the
        // filesystem's enumeration order.
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        entries
            .into_iter()
            .map(|(doc_id, path)| self.load_table(&path).map(|agg| (doc_id, agg)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::TempDir;

    fn sample_aggregate() -> DocumentAggregate {
        DocumentAggregate::from_records(vec![
            WordRecord {
                word: "cat".to_string(),
                total: 3,
                sentences: vec![
                    "i saw a black cat.".to_string(),
                    "the cat doesnt like me.".to_string(),
                ],
            },
            WordRecord {
                word: "dog".to_string(),
                total: 4,
                sentences: vec!["dog dog dog dog".to_string()],
            },
        ])
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(dir.path());

        store.save("doc1", &sample_aggregate()).unwrap();
        let loaded = store.load_all().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, "doc1");
        assert_eq!(loaded[0].1, sample_aggregate());
    }

    #[test]
    fn test_load_all_sorted_by_doc_id() {
        let dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(dir.path());

        store.save("zebra", &sample_aggregate()).unwrap();
        store.save("alpha", &sample_aggregate()).unwrap();
        store.save("mango", &sample_aggregate()).unwrap();

        let ids: Vec<String> = store.load_all().unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["alpha", "mango", "zebra"]);
    }

    #[test]
    fn test_unrelated_files_ignored() {
        let dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(dir.path());

        fs::write(dir.path().join("notes.txt"), "not a table").unwrap();
        store.save("doc1", &sample_aggregate()).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, "doc1");
    }

    #[test]
    fn test_missing_columns_are_fatal() {
        let dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(dir.path());

        let file = File::create(dir.path().join("broken.csv.gz")).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"word,count\ncat,3\n").unwrap();
        encoder.finish().unwrap();

        let result = store.load_all();
        assert!(matches!(result, Err(GleanerError::Storage(_))));
    }

    #[test]
    fn test_bad_total_is_fatal() {
        let dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(dir.path());

        let file = File::create(dir.path().join("broken.csv.gz")).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(b"word,total,sentences\ncat,lots,a cat sentence\n")
            .unwrap();
        encoder.finish().unwrap();

        let result = store.load_all();
        assert!(matches!(result, Err(GleanerError::Storage(_))));
    }
}
