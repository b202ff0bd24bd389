//! The batch run: fetch every article, score every saved file, write the report.
//!
//! Phases run strictly one after the other on the current thread:
//! 1. **Setup**: load the input table and both lexicons (either missing aborts)
//! 2. **Fetching**: one GET per row, saving `<URL_ID>.txt` as it goes
//! 3. **Analysis**: score each text file and join it to its input row
//! 4. **Output**: write the report in the format the output extension names

use std::error::Error;
use std::time::Instant;

use tracing::{info, instrument};

use crate::config::RunConfig;
use crate::input::read_input_table;
use crate::lexicon::SentimentLexicons;
use crate::models::FetchSummary;
use crate::outputs;
use crate::report;
use crate::scrapers::{ArticleClient, fetch_all};
use crate::utils::ensure_writable_dir;

/// What a finished run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fetch: FetchSummary,
    pub report_rows: usize,
}

/// Execute one full run with `config`.
#[instrument(level = "info", skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub async fn run(config: &RunConfig) -> Result<RunSummary, Box<dyn Error>> {
    let start_time = Instant::now();

    // Resolve the output format before any network work.
    outputs::ReportFormat::from_path(&config.output)?;

    let rows = read_input_table(&config.input)?;
    let lexicons = SentimentLexicons::load(&config.positive_words, &config.negative_words)?;

    let fetch = if config.skip_fetch {
        info!("Skipping fetch phase; analysing existing article files");
        FetchSummary::default()
    } else {
        ensure_writable_dir(&config.articles_dir).await?;
        let client = ArticleClient::new(&config.user_agent, config.request_timeout)?;
        fetch_all(&client, &rows, &config.articles_dir).await?
    };

    let report_rows = report::assemble(&config.articles_dir, &rows, &lexicons).await?;
    outputs::write_report(&report_rows, &config.output).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        fetched = fetch.succeeded,
        failed = fetch.failed,
        rows = report_rows.len(),
        "Run complete"
    );

    Ok(RunSummary {
        fetch,
        report_rows: report_rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::article::tests::{PAGE, serve, unreachable_url};
    use calamine::{Data, Reader, open_workbook_auto};
    use std::path::Path;

    fn write(path: &Path, contents: &str) {
        std::fs::write(path, contents).unwrap();
    }

    fn config_in(dir: &Path, input_csv: &str, output: &str) -> RunConfig {
        write(&dir.join("Input.csv"), input_csv);
        write(
            &dir.join("positive-words.txt"),
            ";;; header line\n; more header\nraised\ncalm\n",
        );
        write(&dir.join("negative-words.txt"), "fell\n");
        RunConfig {
            input: dir.join("Input.csv"),
            articles_dir: dir.join("articles"),
            positive_words: dir.join("positive-words.txt"),
            negative_words: dir.join("negative-words.txt"),
            output: dir.join(output),
            request_timeout: Some(std::time::Duration::from_secs(5)),
            ..RunConfig::default()
        }
    }

    #[tokio::test]
    async fn test_run_survives_unreachable_url() {
        let dir = tempfile::tempdir().unwrap();
        let good = serve(200, PAGE).await;
        let bad = unreachable_url().await;
        let input = format!("URL_ID,URL\n1,{good}\n2,{bad}\n");
        let config = config_in(dir.path(), &input, "Output Data Structure.csv");

        let summary = run(&config).await.unwrap();
        assert_eq!(summary.fetch.succeeded, 1);
        assert_eq!(summary.fetch.failed, 1);
        assert_eq!(summary.report_rows, 2);

        assert_eq!(
            std::fs::read_to_string(dir.path().join("articles/2.txt")).unwrap(),
            "\n"
        );

        let mut reader = csv::Reader::from_path(&config.output).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 15);
        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");
        // "raised" and "calm" from the served page
        assert_eq!(&records[0][2], "2");
        assert_eq!(&records[1][0], "2");
        assert_eq!(&records[1][11], "0");
    }

    #[tokio::test]
    async fn test_run_skip_fetch_uses_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            skip_fetch: true,
            ..config_in(
                dir.path(),
                "URL_ID,URL\nkept,https://example.com/kept\n",
                "report.json",
            )
        };
        std::fs::create_dir(&config.articles_dir).unwrap();
        write(&config.articles_dir.join("kept.txt"), "Title\nPrices fell. We stayed calm.");
        write(&config.articles_dir.join("stray.txt"), "No row for this one.");

        let summary = run(&config).await.unwrap();
        assert_eq!(summary.fetch, FetchSummary::default());
        assert_eq!(summary.report_rows, 1);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&config.output).unwrap()).unwrap();
        assert_eq!(value["rows"][0]["URL_ID"], "kept");
        assert_eq!(value["rows"][0]["Negative Score"], 1);
        assert_eq!(value["rows"][0]["Positive Score"], 1);
        assert_eq!(value["rows"][0]["Personal Pronouns"], 1);
    }

    #[tokio::test]
    async fn test_run_workbook_input_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Input.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "URL_ID").unwrap();
        sheet.write_string(0, 1, "URL").unwrap();
        sheet.write_number(1, 0, 37.0).unwrap();
        sheet.write_string(1, 1, "https://example.com/37").unwrap();
        workbook.save(&input).unwrap();

        let config = RunConfig {
            input,
            skip_fetch: true,
            ..config_in(dir.path(), "", "Output Data Structure.xlsx")
        };
        std::fs::create_dir(&config.articles_dir).unwrap();
        write(&config.articles_dir.join("37.txt"), "Title\nPrices fell. We stayed calm.");

        let summary = run(&config).await.unwrap();
        assert_eq!(summary.report_rows, 1);

        let mut report = open_workbook_auto(&config.output).unwrap();
        let range = report.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.get_value((0, 2)), Some(&Data::String("Positive Score".to_string())));
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("37".to_string())));
        assert_eq!(range.get_value((1, 3)), Some(&Data::Float(1.0)));
    }

    #[tokio::test]
    async fn test_run_missing_lexicon_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            negative_words: dir.path().join("missing.txt"),
            ..config_in(dir.path(), "URL_ID,URL\n", "out.csv")
        };

        let err = run(&config).await.unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
        assert!(!config.output.exists());
    }

    #[tokio::test]
    async fn test_run_rejects_unknown_output_format_early() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "URL_ID,URL\n", "out.ods");
        assert!(run(&config).await.is_err());
        assert!(!config.articles_dir.exists());
    }
}
