//! One-shot construction of the query engine from a dataset file.

use std::{io::BufReader, time::Instant};

use camino::{Utf8Path, Utf8PathBuf};
use foodpermit_core::{FieldKey, FoodPermitEngine};
use foodpermit_fs::open_utf8_file;
use log::info;
use thiserror::Error;

use crate::{IngestError, IngestReport, read_permit_records};

/// Dataset file name used when no path is configured.
pub const DEFAULT_DATASET_PATH: &str = "Mobile_Food_Permit_Map.csv";

/// Errors that prevent the engine from being built.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be opened.
    #[error("failed to open permit dataset at {path}: {source}")]
    Open {
        /// Dataset location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The dataset file could not be parsed.
    #[error("failed to parse permit dataset at {path}: {source}")]
    Ingest {
        /// Dataset location.
        path: Utf8PathBuf,
        /// Ingestion failure.
        #[source]
        source: IngestError,
    },
}

/// Read and parse the permit dataset at `path`.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened or parsed.
pub fn load_permit_records(path: &Utf8Path) -> Result<IngestReport, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let report =
        read_permit_records(BufReader::new(file)).map_err(|source| LoadError::Ingest {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "Loaded {} permit records from {path} ({} malformed rows skipped)",
        report.records.len(),
        report.summary.rows_skipped
    );
    Ok(report)
}

/// Load the dataset at `path` and build an engine indexing `fields`.
///
/// Either the whole engine is built or an error is returned.
///
/// # Errors
/// Returns [`LoadError`] when the dataset cannot be opened or parsed.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use foodpermit_core::DEFAULT_INDEXED_FIELDS;
/// use foodpermit_data::initialise_engine;
///
/// # fn main() -> Result<(), foodpermit_data::LoadError> {
/// let engine = initialise_engine(
///     Utf8Path::new("Mobile_Food_Permit_Map.csv"),
///     &DEFAULT_INDEXED_FIELDS,
/// )?;
/// println!("{} trucks near the ferry building", engine.geo_search(37.7955, -122.3937, 500.0).len());
/// # Ok(())
/// # }
/// ```
pub fn initialise_engine(
    path: &Utf8Path,
    fields: &[FieldKey],
) -> Result<FoodPermitEngine, LoadError> {
    let started = Instant::now();
    let report = load_permit_records(path)?;
    let engine = FoodPermitEngine::new(report.records, fields);
    info!(
        "Engine ready in {:?}: {} of {} records located",
        started.elapsed(),
        engine.dataset().geo_index().located_count(),
        engine.dataset().len()
    );
    Ok(engine)
}
