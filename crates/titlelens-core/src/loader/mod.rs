/// Loader — turns a CSV payload into raw rows, and raw rows into a catalog.
///
/// This is the only fallible stage of the pipeline. A payload that cannot be
/// read or is not valid CSV fails the whole load with a [`LoadError`]; no
/// partial result is produced. Problems inside individual rows are not
/// errors here, they are the normaliser's business.
pub mod background;
pub mod progress;

use crate::config::AnalysisConfig;
use crate::model::{CleanRecord, RawRecord};
use crate::normalize::{normalize_with_stats, NormalizeStats};
use crate::report::CatalogReport;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Header columns a payload must carry for its rows to be usable at all.
pub const REQUIRED_COLUMNS: &[&str] = &["show_id", "type", "title", "date_added"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV payload: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV header is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Parse every row of a CSV payload with a header line.
///
/// Columns are matched by header name, so column order does not matter and
/// extra columns are ignored. Rows with a different field count than the
/// header are accepted; missing trailing fields read as empty.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = pad_to(result?, headers.len());
        rows.push(record.deserialize::<RawRecord>(Some(&headers))?);
    }
    Ok(rows)
}

/// [`read_rows`] over an in-memory payload.
pub fn read_rows_from_bytes(payload: &[u8]) -> Result<Vec<RawRecord>, LoadError> {
    read_rows(payload)
}

/// [`read_rows`] over a file on disk.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(BufReader::new(file))
}

fn check_headers(headers: &StringRecord) -> Result<(), LoadError> {
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }
    Ok(())
}

/// Short rows are padded with empty fields so header-keyed deserialisation
/// sees every column.
fn pad_to(mut record: StringRecord, len: usize) -> StringRecord {
    while record.len() < len {
        record.push_field("");
    }
    record
}

/// A normalised dataset: the clean records plus what was dropped getting there.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Raw rows before normalisation.
    pub original_count: usize,
    pub records: Vec<CleanRecord>,
    pub stats: NormalizeStats,
}

impl Catalog {
    pub fn from_rows(rows: &[RawRecord]) -> Self {
        let (records, stats) = normalize_with_stats(rows);
        Self {
            original_count: rows.len(),
            records,
            stats,
        }
    }

    pub fn report(&self, config: &AnalysisConfig) -> CatalogReport {
        CatalogReport::build(self.original_count, &self.records, config)
    }
}

/// Read, parse and normalise a CSV file in one step.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let rows = read_rows_from_path(path)?;
    let catalog = Catalog::from_rows(&rows);
    info!(
        path = %path.display(),
        rows = catalog.original_count,
        clean = catalog.records.len(),
        "loaded catalog"
    );
    Ok(catalog)
}
