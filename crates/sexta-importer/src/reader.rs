//! CSV reading for the personnel roster.
//!
//! The roster is semicolon-delimited with a header row naming the columns
//! and may contain accented Latin characters (UTF-8). Rows that fail to
//! deserialize are returned as per-row errors rather than aborting the
//! read, so the batch still processes every remaining row.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use sexta_models::SourceRecord;
use thiserror::Error;

/// Field separator used by the roster exports.
pub const DELIMITER: u8 = b';';

/// Errors that prevent the batch from starting at all.
///
/// Per-row problems are not represented here; they surface as
/// [`RowParse`] entries and count as failed records.
#[derive(Debug, Error)]
pub enum CsvReadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One data row: its 1-based row number and either the deserialized
/// record or the deserialization error message.
pub type RowParse = (usize, Result<SourceRecord, String>);

/// Reads all data rows from a roster file.
pub fn read_source_file(path: &Path) -> Result<Vec<RowParse>, CsvReadError> {
    let file = File::open(path).map_err(|source| CsvReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_source_records(file)
}

/// Reads all data rows from any reader.
///
/// Input order is preserved; row numbers start at 1 for the first data
/// row (the header is not counted).
pub fn read_source_records<R: Read>(input: R) -> Result<Vec<RowParse>, CsvReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(input);

    // Force the header read so a malformed header fails the whole run
    // instead of surfacing as an error on every row.
    reader.headers()?;

    let rows = reader
        .deserialize::<SourceRecord>()
        .enumerate()
        .map(|(idx, result)| (idx + 1, result.map_err(|e| e.to_string())))
        .collect();

    Ok(rows)
}
