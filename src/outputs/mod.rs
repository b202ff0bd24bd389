//! Report writers.
//!
//! The format follows the output file's extension:
//!
//! - [`xlsx`]: `.xlsx`, one worksheet with a header row then one row per article
//! - [`csv`]: `.csv`, the same table as comma-separated text
//! - [`json`]: `.json`, the same rows plus a generation timestamp

pub mod csv;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::error::ReportError;
use crate::models::ReportRow;

/// Output formats selectable by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx") => Ok(Self::Xlsx),
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ReportError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Write `rows` to `path` in the format its extension names.
pub async fn write_report(rows: &[ReportRow], path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    match ReportFormat::from_path(path)? {
        ReportFormat::Xlsx => xlsx::write_report(rows, path),
        ReportFormat::Csv => csv::write_report(rows, path),
        ReportFormat::Json => json::write_report(rows, path).await,
    }
}
