//! Command-line interface definitions for Article Metrics.
//!
//! Every option is optional: running the binary with no arguments uses the
//! default file layout. Path options also read `ARTICLE_METRICS_*` environment
//! variables, and anything unset falls back to the YAML config file (if given)
//! and then to built-in defaults.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the Article Metrics application.
///
/// # Examples
///
/// ```sh
/// # Default layout: Input.xlsx, articles/, MasterDictionary/, Output Data Structure.xlsx
/// article_metrics
///
/// # Custom paths and JSON output
/// article_metrics -i urls.csv -a ./scraped -o report.json
///
/// # Re-score an existing articles directory without fetching
/// article_metrics --skip-fetch
/// ```
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Input table (XLSX or CSV with URL_ID and URL columns)
    #[arg(short, long, env = "ARTICLE_METRICS_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory where fetched article text files are written
    #[arg(short, long, env = "ARTICLE_METRICS_ARTICLES_DIR")]
    pub articles_dir: Option<PathBuf>,

    /// Positive sentiment word list
    #[arg(long, env = "ARTICLE_METRICS_POSITIVE_WORDS")]
    pub positive_words: Option<PathBuf>,

    /// Negative sentiment word list
    #[arg(long, env = "ARTICLE_METRICS_NEGATIVE_WORDS")]
    pub negative_words: Option<PathBuf>,

    /// Report file; the extension picks the format (.xlsx, .csv or .json)
    #[arg(short, long, env = "ARTICLE_METRICS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Analyse the existing articles directory without fetching
    #[arg(long)]
    pub skip_fetch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["article_metrics"]);
        assert!(cli.config.is_none());
        assert!(!cli.skip_fetch);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "article_metrics",
            "-i",
            "urls.csv",
            "-a",
            "/tmp/articles",
            "-o",
            "report.json",
            "-c",
            "config.yaml",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("urls.csv")));
        assert_eq!(cli.articles_dir, Some(PathBuf::from("/tmp/articles")));
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        assert_eq!(cli.config, Some(PathBuf::from("config.yaml")));
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "article_metrics",
            "--positive-words",
            "pos.txt",
            "--negative-words",
            "neg.txt",
            "--user-agent",
            "bot/1.0",
            "--request-timeout-secs",
            "30",
            "--skip-fetch",
        ]);

        assert_eq!(cli.positive_words, Some(PathBuf::from("pos.txt")));
        assert_eq!(cli.negative_words, Some(PathBuf::from("neg.txt")));
        assert_eq!(cli.user_agent.as_deref(), Some("bot/1.0"));
        assert_eq!(cli.request_timeout_secs, Some(30));
        assert!(cli.skip_fetch);
    }
}
