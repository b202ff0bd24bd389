//! Positive and negative sentiment word lists.
//!
//! Lexicon files are plain word lists. They are decoded as ISO-8859-1 so any
//! byte sequence loads, split on whitespace and lowercased. Lines starting
//! with `;` are comments (the usual opinion-lexicon licence header).

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::LexiconError;

/// A set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from disk. A missing or unreadable file is an error.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LexiconError {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_latin1(&bytes);
        info!(words = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// Build a lexicon from ISO-8859-1 encoded bytes.
    pub fn from_latin1(bytes: &[u8]) -> Self {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        Self::parse(&text)
    }

    /// Build a lexicon from already-decoded text.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .filter(|line| !line.trim_start().starts_with(';'))
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of `tokens` present in this lexicon, duplicates included.
    pub fn count_matches<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        tokens.iter().filter(|t| self.contains(t.as_ref())).count()
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }
}

/// The positive and negative lexicons used for scoring.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicons {
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl SentimentLexicons {
    /// Load both lexicons. Either file missing aborts the run.
    pub fn load(
        positive: impl AsRef<Path>,
        negative: impl AsRef<Path>,
    ) -> Result<Self, LexiconError> {
        Ok(Self {
            positive: Lexicon::load(positive)?,
            negative: Lexicon::load(negative)?,
        })
    }
}
