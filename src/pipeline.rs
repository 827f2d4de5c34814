//! Pipeline orchestration.
//!
//! One run: ensure the stopword cache, reset the transit directory, scan the
//! source directory, aggregate and checkpoint each document, fold all
//! checkpoints into the corpus table, and write the ranked report. Fully
//! sequential; the first error aborts the run.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::aggregate::DocumentAggregator;
use crate::analysis::TextAnalyzer;
use crate::config::Config;
use crate::error::Result;
use crate::reduce::reduce;
use crate::report::{finalize, write_report};
use crate::resource::ResourceCache;
use crate::storage::{DocumentStore, FileDocumentStore};

/// What a completed run produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Documents that yielded at least one qualifying word.
    pub documents: usize,

    /// Words in the final report.
    pub words: usize,

    /// Path of the written report.
    pub report_path: PathBuf,
}

/// Execute one full run with the given configuration.
pub fn run(config: &Config) -> Result<RunSummary> {
    let cache = ResourceCache::new(&config.resources_path);
    let stop_words = cache.load_stopwords()?;

    reset_transit_dir(&config.transit_path)?;

    let analyzer = TextAnalyzer::english(stop_words, config.include_stopwords);
    let aggregator = DocumentAggregator::new(analyzer);
    let store = FileDocumentStore::new(&config.transit_path);

    let mut documents = 0;
    for path in document_files(&config.docs_path)? {
        let doc_id = document_id(&path);
        debug!("scanning {}", path.display());

        let reader = BufReader::new(File::open(&path)?);
        let aggregate = aggregator.aggregate(reader)?;

        if aggregate.is_empty() {
            debug!("{doc_id}: no qualifying words, skipped");
            continue;
        }

        info!("{doc_id}: {} distinct words", aggregate.len());
        store.save(&doc_id, &aggregate)?;
        documents += 1;
    }

    let table = reduce(store.load_all()?);
    let records = finalize(table, config.threshold);
    let report_path = write_report(&records, &config.output_path)?;

    info!(
        "processed {documents} documents, {} words at or above threshold {}",
        records.len(),
        config.threshold
    );

    Ok(RunSummary {
        documents,
        words: records.len(),
        report_path,
    })
}

/// Wipe and recreate the transit directory. Destructive reset: there is no
/// incremental resume.
fn reset_transit_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// The source files of the documents directory, sorted by name.
fn document_files(docs_path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(docs_path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Document identifier: the source filename without its extension.
fn document_id(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
