//! CSV report output: one header row, one row per article.

use std::path::Path;

use tracing::{info, instrument};

use crate::error::ReportError;
use crate::models::{REPORT_COLUMNS, ReportRow};

/// Write `rows` as CSV to any writer.
pub fn write_rows<W: std::io::Write>(rows: &[ReportRow], writer: W) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(REPORT_COLUMNS)?;
    for row in rows {
        csv.write_record(row.to_record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `rows` to a CSV file at `path`, replacing it.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_report(rows: &[ReportRow], path: &Path) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_rows(rows, file)?;
    info!(rows = rows.len(), "Wrote CSV report");
    Ok(())
}
