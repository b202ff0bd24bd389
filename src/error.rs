//! Typed error enums for each failure class the pipeline distinguishes.
//!
//! Only [`FetchError`] is recoverable: the fetch phase logs it and degrades
//! to an empty article. Every other error propagates up to `main`, which
//! logs it and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single article could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported url scheme '{0}'")]
    UnsupportedScheme(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http status {0}")]
    Status(u16),
}

/// A sentiment lexicon could not be loaded. Always fatal.
#[derive(Debug, Error)]
#[error("failed to read lexicon {path}: {source}")]
pub struct LexiconError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// The input table could not be read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open input table {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed row in input table {path}: {source}")]
    Row {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook {0} has no worksheet")]
    NoWorksheet(PathBuf),
    #[error("input table {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Assembling or writing the report failed.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("xlsx output failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("unsupported output format for {0} (expected .xlsx, .csv or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Configuration file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_status_display() {
        assert_eq!(FetchError::Status(404).to_string(), "http status 404");
    }

    #[test]
    fn test_lexicon_error_names_path() {
        let err = LexiconError {
            path: PathBuf::from("MasterDictionary/positive-words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("positive-words.txt"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = InputError::MissingColumn {
            path: PathBuf::from("Input.xlsx"),
            column: "URL_ID",
        };
        assert_eq!(err.to_string(), "input table Input.xlsx has no 'URL_ID' column");
    }
}
