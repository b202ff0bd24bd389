//! Spreadsheet report output: a bold header row, then one row per article
//! with the metrics stored as numbers.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{info, instrument};

use crate::error::ReportError;
use crate::models::{REPORT_COLUMNS, ReportRow};

/// Write `rows` to an `.xlsx` workbook at `path`, replacing it.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_report(rows: &[ReportRow], path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, name) in REPORT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, row.input.url_id.as_str())?;
        sheet.write_string(r, 1, row.input.url.as_str())?;
        for (offset, value) in row.metrics.values().into_iter().enumerate() {
            sheet.write_number(r, offset as u16 + 2, value)?;
        }
    }

    workbook.save(path)?;
    info!(rows = rows.len(), "Wrote XLSX report");
    Ok(())
}
