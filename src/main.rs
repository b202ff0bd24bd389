//! # Article Metrics
//!
//! A batch tool that fetches a list of article URLs, extracts their readable
//! text, and scores every article for sentiment and readability into one
//! tabular report.
//!
//! ## Features
//!
//! - Fetches each URL once and keeps the first `<h1>` and every `<p>`
//! - Counts positive and negative lexicon words and derives a polarity score
//! - Estimates subjectivity with an embedded adjective lexicon
//! - Computes readability statistics: sentence length, complex words, Fog
//!   index, syllables and word length, personal pronouns
//! - Writes the report as XLSX, CSV or JSON
//!
//! ## Usage
//!
//! ```sh
//! article_metrics -i Input.xlsx -o "Output Data Structure.xlsx"
//! ```
//!
//! ## Architecture
//!
//! The application runs a sequential pipeline:
//! 1. **Fetching**: Download every URL and save `<URL_ID>.txt`
//! 2. **Analysis**: Score each saved file against the sentiment lexicons
//! 3. **Output**: Join scores to input rows and write the report

use std::error::Error;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod input;
mod lexicon;
mod models;
mod outputs;
mod pipeline;
mod report;
mod scrapers;
mod text;
mod utils;

use cli::Cli;
use config::RunConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "article_metrics starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match RunConfig::resolve(args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(
        input = %config.input.display(),
        articles_dir = %config.articles_dir.display(),
        output = %config.output.display(),
        skip_fetch = config.skip_fetch,
        "Resolved configuration"
    );

    match pipeline::run(&config).await {
        Ok(summary) => {
            info!(
                attempted = summary.fetch.attempted,
                failed = summary.fetch.failed,
                rows = summary.report_rows,
                output = %config.output.display(),
                "Report saved"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            Err(e)
        }
    }
}
