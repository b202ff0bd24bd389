//! Generic article fetcher.
//!
//! Downloads a page with a single GET and keeps the first `<h1>` as the title
//! and every `<p>` as the body. No boilerplate stripping, no deduplication:
//! navigation or footer paragraphs end up in the body as well.

use std::path::Path;
use std::pin::pin;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tokio::fs;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::error::FetchError;
use crate::models::{Article, FetchSummary, InputRow};
use crate::utils::truncate_for_log;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// HTTP client shared by every fetch in a run.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http: Client,
}

impl ArticleClient {
    /// Build a client sending `user_agent`. Without `timeout` the client's
    /// default (no overall timeout) applies.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Fetch one page and extract its title and paragraphs.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn fetch(&self, url: &str) -> Result<Article, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let response = self.http.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;

        let article = extract_article(&body);
        info!(
            title = %truncate_for_log(&article.title, 80),
            body_bytes = article.body.len(),
            "Parsed article"
        );
        Ok(article)
    }
}

/// Pull the title and paragraph text out of an HTML document.
pub fn extract_article(html: &str) -> Article {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|h1| h1.text().collect::<String>())
        .unwrap_or_default();

    let body = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .join("\n");

    Article { title, body }
}

/// Fetch every row one at a time and save `<URL_ID>.txt` into `articles_dir`.
///
/// A failed fetch is logged and saved as an empty article so the row still
/// gets analysed. Only file-system errors abort.
#[instrument(level = "info", skip_all, fields(rows = rows.len(), dir = %articles_dir.display()))]
pub async fn fetch_all(
    client: &ArticleClient,
    rows: &[InputRow],
    articles_dir: &Path,
) -> Result<FetchSummary, std::io::Error> {
    fs::create_dir_all(articles_dir).await?;

    // `then` polls one fetch at a time, so each file lands before the next request.
    let mut outcomes = pin!(
        stream::iter(rows).then(|row| async move { (row, client.fetch(&row.url).await) })
    );

    let mut summary = FetchSummary::default();
    while let Some((row, outcome)) = outcomes.next().await {
        summary.attempted += 1;
        let article = match outcome {
            Ok(article) => {
                debug!(url_id = %row.url_id, url = %row.url, "Fetched article");
                summary.succeeded += 1;
                article
            }
            Err(e) => {
                error!(url_id = %row.url_id, url = %row.url, error = %e, "Article fetch failed; saving empty text");
                summary.failed += 1;
                Article::default()
            }
        };

        let path = articles_dir.join(format!("{}.txt", row.url_id));
        fs::write(&path, article.to_file_contents()).await?;
    }

    info!(
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Fetched article contents"
    );
    Ok(summary)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `html` with `status` to every connection on a local port.
    pub(crate) async fn serve(status: u16, html: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status} Status\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{html}",
                    html.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/article")
    }

    /// An address nothing listens on.
    pub(crate) async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/gone")
    }

    pub(crate) const PAGE: &str = "<html><head><title>ignored</title></head><body>\
        <nav><p>Home</p></nav>\
        <h1>Rates <em>rise</em> again</h1><h1>Second heading</h1>\
        <p>The bank raised rates.</p><p>Markets were <b>calm</b>.</p>\
        </body></html>";

    fn client() -> ArticleClient {
        ArticleClient::new("article_metrics-test", Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_extract_article_title_and_paragraphs() {
        let article = extract_article(PAGE);
        assert_eq!(article.title, "Rates rise again");
        assert_eq!(article.body, "Home\nThe bank raised rates.\nMarkets were calm.");
    }

    #[test]
    fn test_extract_article_without_h1_or_paragraphs() {
        let article = extract_article("<html><body><div>Just a div</div></body></html>");
        assert_eq!(article, Article::default());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve(200, PAGE).await;
        let article = client().fetch(&url).await.unwrap();
        assert_eq!(article.title, "Rates rise again");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve(404, "<p>missing</p>").await;
        let err = client().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        let url = unreachable_url().await;
        let err = client().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let err = client().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        let err = client().fetch("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[tokio::test]
    async fn test_fetch_all_writes_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            InputRow {
                url_id: "ok".to_string(),
                url: serve(200, PAGE).await,
            },
            InputRow {
                url_id: "down".to_string(),
                url: unreachable_url().await,
            },
        ];

        let summary = fetch_all(&client(), &rows, dir.path()).await.unwrap();
        assert_eq!(
            summary,
            FetchSummary {
                attempted: 2,
                succeeded: 1,
                failed: 1
            }
        );

        let ok = std::fs::read_to_string(dir.path().join("ok.txt")).unwrap();
        assert!(ok.starts_with("Rates rise again\n"));
        let down = std::fs::read_to_string(dir.path().join("down.txt")).unwrap();
        assert_eq!(down, "\n");
    }
}
