//! Input table loading.
//!
//! The input is a spreadsheet (`.xlsx`, `.xlsm`, `.xls`, `.ods`, first
//! worksheet) or a CSV file. Either way the header row names at least the
//! `URL_ID` and `URL` columns; other columns are ignored.

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{info, instrument};

use crate::error::InputError;
use crate::models::InputRow;

const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Read every row of the input table, in file order.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_input_table(path: &Path) -> Result<Vec<InputRow>, InputError> {
    let rows = if is_workbook(path) {
        read_workbook(path)?
    } else {
        read_csv(path)?
    };
    info!(rows = rows.len(), "Loaded input table");
    Ok(rows)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
}

fn read_csv(path: &Path) -> Result<Vec<InputRow>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reader
        .deserialize::<InputRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| InputError::Row {
            path: path.to_path_buf(),
            source,
        })
}

fn read_workbook(path: &Path) -> Result<Vec<InputRow>, InputError> {
    let workbook_error = |source: calamine::Error| InputError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::NoWorksheet(path.to_path_buf()))?
        .map_err(workbook_error)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let column = |name: &'static str| {
        header
            .iter()
            .position(|cell| cell_text(cell) == name)
            .ok_or_else(|| InputError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let id_col = column("URL_ID")?;
    let url_col = column("URL")?;

    Ok(rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| InputRow {
            url_id: row.get(id_col).map(cell_text).unwrap_or_default(),
            url: row.get(url_col).map(cell_text).unwrap_or_default(),
        })
        .collect())
}

/// Cell contents as trimmed text. Whole numbers print without a fraction, so
/// a numeric `URL_ID` of `123` matches the file `123.txt`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Lookup from identifier to input row. The first row wins on duplicates.
#[derive(Debug, Default)]
pub struct InputIndex<'a> {
    by_id: HashMap<&'a str, &'a InputRow>,
}

impl<'a> InputIndex<'a> {
    pub fn new(rows: &'a [InputRow]) -> Self {
        let mut by_id = HashMap::with_capacity(rows.len());
        for row in rows {
            by_id.entry(row.url_id.as_str()).or_insert(row);
        }
        Self { by_id }
    }

    pub fn get(&self, url_id: &str) -> Option<&'a InputRow> {
        self.by_id.get(url_id).copied()
    }
}
