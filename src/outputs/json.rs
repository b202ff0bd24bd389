//! JSON report output.
//!
//! The document carries the generation timestamp next to the rows:
//!
//! ```text
//! {
//!   "generated_at": "2025-05-06T20:30:00+02:00",
//!   "row_count": 2,
//!   "rows": [ { "URL_ID": "...", "URL": "...", "Positive Score": 3, ... } ]
//! }
//! ```

use std::path::Path;

use chrono::Local;
use serde::Serialize;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::ReportError;
use crate::models::ReportRow;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub row_count: usize,
    pub rows: &'a [ReportRow],
}

impl<'a> JsonReport<'a> {
    pub fn new(rows: &'a [ReportRow]) -> Self {
        Self {
            generated_at: Local::now().to_rfc3339(),
            row_count: rows.len(),
            rows,
        }
    }
}

/// Write `rows` as a pretty-printed JSON document at `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_report(rows: &[ReportRow], path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(&JsonReport::new(rows))?;
    fs::write(path, json).await?;
    info!(rows = rows.len(), "Wrote JSON report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InputRow, TextMetrics};

    #[tokio::test]
    async fn test_write_report_round_trips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let rows = vec![ReportRow {
            input: InputRow {
                url_id: "9".to_string(),
                url: "https://example.com/9".to_string(),
            },
            metrics: TextMetrics {
                fog_index: 12.5,
                ..TextMetrics::default()
            },
        }];

        write_report(&rows, &path).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["row_count"], 1);
        assert!(value["generated_at"].as_str().is_some());
        assert_eq!(value["rows"][0]["URL_ID"], "9");
        assert_eq!(value["rows"][0]["Fog Index"], 12.5);
    }
}
