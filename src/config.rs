//! Run configuration.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags (and their environment variables), an optional YAML file, then the
//! built-in defaults below. The merged [`RunConfig`] is passed explicitly to
//! [`crate::pipeline::run`].
//!
//! ```yaml
//! input: Input.xlsx
//! articles_dir: articles
//! positive_words: MasterDictionary/positive-words.txt
//! negative_words: MasterDictionary/negative-words.txt
//! output: Output Data Structure.xlsx
//! user_agent: article_metrics/0.1
//! request_timeout_secs: 20
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, instrument};

use crate::cli::Cli;
use crate::error::ConfigError;

pub const DEFAULT_INPUT: &str = "Input.xlsx";
pub const DEFAULT_ARTICLES_DIR: &str = "articles";
pub const DEFAULT_POSITIVE_WORDS: &str = "MasterDictionary/positive-words.txt";
pub const DEFAULT_NEGATIVE_WORDS: &str = "MasterDictionary/negative-words.txt";
pub const DEFAULT_OUTPUT: &str = "Output Data Structure.xlsx";
pub const DEFAULT_USER_AGENT: &str = concat!("article_metrics/", env!("CARGO_PKG_VERSION"));

/// Contents of the optional YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub articles_dir: Option<PathBuf>,
    pub positive_words: Option<PathBuf>,
    pub negative_words: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config file");
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub articles_dir: PathBuf,
    pub positive_words: PathBuf,
    pub negative_words: PathBuf,
    pub output: PathBuf,
    pub user_agent: String,
    pub request_timeout: Option<Duration>,
    pub skip_fetch: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            articles_dir: PathBuf::from(DEFAULT_ARTICLES_DIR),
            positive_words: PathBuf::from(DEFAULT_POSITIVE_WORDS),
            negative_words: PathBuf::from(DEFAULT_NEGATIVE_WORDS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
            skip_fetch: false,
        }
    }
}

impl RunConfig {
    /// Layer CLI flags over the file config over the defaults.
    pub fn merge(cli: Cli, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            input: cli.input.or(file.input).unwrap_or(defaults.input),
            articles_dir: cli
                .articles_dir
                .or(file.articles_dir)
                .unwrap_or(defaults.articles_dir),
            positive_words: cli
                .positive_words
                .or(file.positive_words)
                .unwrap_or(defaults.positive_words),
            negative_words: cli
                .negative_words
                .or(file.negative_words)
                .unwrap_or(defaults.negative_words),
            output: cli.output.or(file.output).unwrap_or(defaults.output),
            user_agent: cli
                .user_agent
                .or(file.user_agent)
                .unwrap_or(defaults.user_agent),
            request_timeout: cli
                .request_timeout_secs
                .or(file.request_timeout_secs)
                .map(Duration::from_secs),
            skip_fetch: cli.skip_fetch,
        }
    }

    /// Resolve the configuration for `cli`, reading its config file if any.
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }
}
