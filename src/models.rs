//! Data models for input rows, scraped articles, and the scored report.
//!
//! This module defines the core data structures used throughout the application:
//! - [`InputRow`]: One identifier/URL pair from the input table
//! - [`Article`]: Title and paragraph text extracted from a fetched page
//! - [`TextMetrics`]: The thirteen scores computed for one article
//! - [`ReportRow`]: An input row joined with its metrics, one per output line
//!
//! Column names are kept exactly as they appear in the input and output
//! tables, hence the explicit `#[serde(rename)]` attributes.

use serde::{Deserialize, Serialize};

/// One row of the input table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputRow {
    /// Join key linking the URL to its text file and report row.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// The article URL to fetch.
    #[serde(rename = "URL")]
    pub url: String,
}

/// Readable text extracted from one article page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    /// Text of the first `<h1>`, or empty.
    pub title: String,
    /// Text of every `<p>`, joined with newlines.
    pub body: String,
}

impl Article {
    /// The on-disk representation: title, newline, body.
    pub fn to_file_contents(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

/// The scores computed for one article's text.
///
/// Field order matches the report column order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TextMetrics {
    #[serde(rename = "Positive Score")]
    pub positive_score: usize,
    #[serde(rename = "Negative Score")]
    pub negative_score: usize,
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,
    #[serde(rename = "Percentage of Complex Words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,
    #[serde(rename = "Avg Number of Words per Sentence")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: usize,
    #[serde(rename = "Word Count")]
    pub word_count: usize,
    #[serde(rename = "Syllable per Word")]
    pub syllable_per_word: f64,
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: usize,
    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
}

/// One line of the output report: the passthrough input columns followed
/// by the metric columns.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportRow {
    #[serde(flatten)]
    pub input: InputRow,
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

impl TextMetrics {
    /// The thirteen metrics as numbers, in report column order.
    pub fn values(&self) -> [f64; 13] {
        [
            self.positive_score as f64,
            self.negative_score as f64,
            self.polarity_score,
            self.subjectivity_score,
            self.avg_sentence_length,
            self.percentage_complex_words,
            self.fog_index,
            self.avg_words_per_sentence,
            self.complex_word_count as f64,
            self.word_count as f64,
            self.syllable_per_word,
            self.personal_pronouns as f64,
            self.avg_word_length,
        ]
    }
}

impl ReportRow {
    /// Render the row as table cells in [`REPORT_COLUMNS`] order.
    pub fn to_record(&self) -> Vec<String> {
        [self.input.url_id.clone(), self.input.url.clone()]
            .into_iter()
            .chain(self.metrics.values().iter().map(f64::to_string))
            .collect()
    }
}

/// Header row of the tabular report, in column order.
pub const REPORT_COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "Positive Score",
    "Negative Score",
    "Polarity Score",
    "Subjectivity Score",
    "Avg Sentence Length",
    "Percentage of Complex Words",
    "Fog Index",
    "Avg Number of Words per Sentence",
    "Complex Word Count",
    "Word Count",
    "Syllable per Word",
    "Personal Pronouns",
    "Avg Word Length",
];

/// Counts gathered while fetching every input row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}
