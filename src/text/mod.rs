//! Text analysis: tokenization, the subjectivity model and the metrics engine.
//!
//! # Submodules
//!
//! - [`tokenize`]: Sentence splitting and Treebank-style word tokens
//! - [`sentiment`]: Lexicon-based subjectivity scoring
//! - [`metrics`]: The thirteen per-article statistics

pub mod metrics;
pub mod sentiment;
pub mod tokenize;

pub use metrics::analyze;
