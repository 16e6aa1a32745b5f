//! CSV ingestion of permit rows.
//!
//! The whole source is streamed through a `csv` reader; there is no fixed
//! buffer size. The header row is discarded and rows that do not carry
//! exactly [`RECORD_WIDTH`] fields are skipped and counted.

use std::io::Read;

use foodpermit_core::{PermitRecord, RECORD_WIDTH};
use log::debug;
use thiserror::Error;

/// Row counts gathered while reading a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Data rows read, excluding the header.
    pub rows_read: usize,
    /// Rows dropped because their field count was wrong.
    pub rows_skipped: usize,
}

/// Records parsed from a source together with its summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Accepted records in source order.
    pub records: Vec<PermitRecord>,
    /// Row counts.
    pub summary: IngestSummary,
}

/// Errors that abort ingestion of a whole source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The CSV reader could not decode the source.
    #[error("failed to read permit rows: {source}")]
    Read {
        /// Reader failure, including I/O, quoting and UTF-8 errors.
        #[source]
        source: csv::Error,
    },
}

/// Parse every permit row from `source`.
///
/// # Errors
/// Returns [`IngestError::Read`] if the source cannot be decoded. No partial
/// report is returned.
///
/// # Examples
/// ```
/// use foodpermit_data::read_permit_records;
///
/// let header = vec!["h"; 23].join(",");
/// let mut row = vec![""; 23];
/// row[1] = "Tasty Tacos";
/// let source = format!("{header}\n{}\nshort,row\n", row.join(","));
///
/// let report = read_permit_records(source.as_bytes()).unwrap();
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.records[0].applicant, "Tasty Tacos");
/// assert_eq!(report.summary.rows_skipped, 1);
/// ```
pub fn read_permit_records<R: Read>(source: R) -> Result<IngestReport, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut report = IngestReport::default();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Read { source })?;
        report.summary.rows_read += 1;
        match PermitRecord::from_fields(row.iter()) {
            Ok(record) => report.records.push(record),
            Err(err) => {
                report.summary.rows_skipped += 1;
                debug!(
                    "Skipping row at line {}: {err}",
                    row.position().map_or(0, csv::Position::line)
                );
            }
        }
    }
    debug!(
        "Read {} rows of width {RECORD_WIDTH}, skipped {}",
        report.summary.rows_read, report.summary.rows_skipped
    );
    Ok(report)
}
