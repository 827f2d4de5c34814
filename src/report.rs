//! Final report filtering, ordering, and serialization.
//!
//! Words below the occurrence threshold are dropped (the threshold itself
//! passes), survivors are sorted by total descending, and the result is
//! written as `result.csv` with columns `word,docs,total,sentences`.

use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::info;

use crate::error::Result;
use crate::reduce::{CorpusRecord, CorpusTable};

/// Name of the final report file inside the output directory.
pub const RESULT_CSV_FILENAME: &str = "result.csv";

/// Columns of the final report, in order.
pub const REPORT_COLUMNS: [&str; 4] = ["word", "docs", "total", "sentences"];

/// Filter the accumulated table by threshold and order it by total
/// descending.
///
/// The sort is stable: records with equal totals keep their accumulator
/// (first-encounter) order. Tests should only assert relative ordering
/// between unequal totals.
pub fn finalize(table: CorpusTable, threshold: u64) -> Vec<CorpusRecord> {
    let mut records: Vec<CorpusRecord> = table
        .into_records()
        .into_iter()
        .filter(|record| record.total >= threshold)
        .collect();

    records.sort_by(|a, b| b.total.cmp(&a.total));
    records
}

/// Write the final report into `output_dir/result.csv`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_report(records: &[CorpusRecord], output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(RESULT_CSV_FILENAME);

    let mut writer = WriterBuilder::new().from_path(&path)?;
    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        let total = record.total.to_string();
        writer.write_record([
            record.word.as_str(),
            record.docs.as_str(),
            total.as_str(),
            record.sentences.as_str(),
        ])?;
    }
    writer.flush()?;

    info!("wrote {} words to {}", records.len(), path.display());
    Ok(path)
}
