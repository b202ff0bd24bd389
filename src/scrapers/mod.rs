//! Article fetching.
//!
//! Every input URL goes through the same two steps:
//!
//! 1. **Fetching**: one blocking-in-sequence GET per URL, no retries
//! 2. **Extraction**: first `<h1>` as the title, every `<p>` as the body
//!
//! Failed fetches are logged and degrade to an empty article; the run goes on.

pub mod article;

pub use article::{ArticleClient, fetch_all};
