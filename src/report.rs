//! Report assembly: scores every saved article and joins it to its input row.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::error::ReportError;
use crate::input::InputIndex;
use crate::lexicon::SentimentLexicons;
use crate::models::{InputRow, ReportRow};
use crate::text;

/// Every `*.txt` file directly inside `dir`, sorted by file name.
pub async fn discover_article_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Identifier encoded in an article file name (`<URL_ID>.txt`).
pub fn url_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Score every article file in `articles_dir` and join it to `rows`.
///
/// Files without a matching input row are skipped with a warning. The
/// returned rows follow file discovery order.
#[instrument(level = "info", skip_all, fields(dir = %articles_dir.display()))]
pub async fn assemble(
    articles_dir: &Path,
    rows: &[InputRow],
    lexicons: &SentimentLexicons,
) -> Result<Vec<ReportRow>, ReportError> {
    let index = InputIndex::new(rows);
    let files = discover_article_files(articles_dir).await?;
    info!(files = files.len(), "Discovered article files");

    let mut report = Vec::with_capacity(files.len());
    for file in &files {
        let Some(url_id) = url_id_from_path(file) else {
            continue;
        };
        let Some(input) = index.get(&url_id) else {
            warn!(file = %file.display(), %url_id, "No matching URL_ID found; skipping file");
            continue;
        };

        let bytes = fs::read(file).await?;
        let contents = String::from_utf8_lossy(&bytes);
        let metrics = text::analyze(&contents, lexicons);
        if metrics.word_count == 0 {
            warn!(%url_id, "Article has no words; metrics are zero");
        }
        debug!(%url_id, words = metrics.word_count, fog = metrics.fog_index, "Scored article");

        report.push(ReportRow {
            input: input.clone(),
            metrics,
        });
    }

    info!(
        rows = report.len(),
        skipped = files.len() - report.len(),
        "Assembled report"
    );
    Ok(report)
}
