//! The per-article pipeline: resolve, fetch, extract, analyze.
//!
//! Articles are streamed in configured order. With `concurrency == 1` each
//! fetch finishes before the next starts; larger values allow that many
//! in-flight fetches while still yielding outcomes in input order.

use crate::analysis::{contexts, frequencies};
use crate::config::AnalyzerConfig;
use crate::error::ArticleError;
use crate::extractor::extract_body;
use crate::fetch::PageFetcher;
use crate::models::{ArticleOutcome, ArticleReport, BatchSummary};
use futures::stream::{self, StreamExt};
use tracing::{error, info, instrument, warn};

/// Resolve, fetch, extract, and analyze a single article.
///
/// # Errors
///
/// Any [`ArticleError`]: unknown domain, missing rule, network or HTTP
/// failure, or a page without the publisher's body container.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn analyze_article<F: PageFetcher>(
    url: &str,
    config: &AnalyzerConfig,
    fetcher: &F,
) -> Result<ArticleReport, ArticleError> {
    info!("Parsing {url}...");
    let publisher = config.publishers.resolve(url)?;
    info!(%publisher, "{url} is from {publisher}");
    let rule = config.publishers.rule_for(publisher)?;

    let html = fetcher.fetch(url).await?;
    let text = extract_body(&html, publisher, rule)?;
    let word_count = text.split_whitespace().count();
    info!(bytes = text.len(), word_count, "Extracted article text");

    Ok(ArticleReport {
        url: url.to_string(),
        publisher: publisher.to_string(),
        word_count,
        frequencies: frequencies(&text, &config.keywords),
        contexts: contexts(&text, &config.keywords),
    })
}

/// Process every configured article, never aborting on a per-article failure.
///
/// Outcomes come back in the same order as `config.articles`.
#[instrument(level = "info", skip_all, fields(articles = config.articles.len(), concurrency = concurrency))]
pub async fn run_batch<F: PageFetcher>(
    config: &AnalyzerConfig,
    fetcher: &F,
    concurrency: usize,
) -> Vec<ArticleOutcome> {
    let outcomes: Vec<ArticleOutcome> = stream::iter(config.articles.iter())
        .map(|url| async move {
            let result = analyze_article(url, config, fetcher).await;
            match &result {
                Err(e) if e.is_unknown_domain() => {
                    warn!(%url, error = %e, "Skipping article from unlisted domain")
                }
                Err(e) => error!(%url, error = %e, "Cannot parse article; continuing"),
                Ok(_) => {}
            }
            ArticleOutcome {
                url: url.clone(),
                result,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch complete"
    );
    outcomes
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::publishers::PublisherTable;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned HTML per URL and records every request.
    #[derive(Default)]
    pub(crate) struct FixtureFetcher {
        pages: HashMap<String, String>,
        pub(crate) requested: RefCell<Vec<String>>,
    }

    impl FixtureFetcher {
        pub(crate) fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    impl PageFetcher for FixtureFetcher {
        async fn fetch(&self, url: &str) -> Result<String, ArticleError> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ArticleError::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    pub(crate) const NYT_URL: &str = "https://www.nytimes.com/2021/01/01/us/story.html";
    pub(crate) const UNKNOWN_URL: &str = "https://www.unknown-site.com/x";

    pub(crate) const NYT_HTML: &str = r#"<html><body>
        <section name="articleBody">
          <p>Climate policy shapes the economy. Climate talks resume.</p>
          <p>Economists disagree, climate activists protest.</p>
        </section>
    </body></html>"#;

    pub(crate) fn config(articles: &[&str]) -> AnalyzerConfig {
        AnalyzerConfig {
            keywords: vec!["climate".to_string(), "economy".to_string()],
            articles: articles.iter().map(|a| a.to_string()).collect(),
            publishers: PublisherTable::builtin(),
        }
    }

    #[tokio::test]
    async fn test_analyze_article_success() {
        let fetcher = FixtureFetcher::default().with_page(NYT_URL, NYT_HTML);
        let report = analyze_article(NYT_URL, &config(&[]), &fetcher).await.unwrap();

        assert_eq!(report.publisher, "New York Times");
        assert_eq!(report.frequencies["climate"], 3);
        assert_eq!(report.frequencies["economy"], 0);
        assert_eq!(
            report.contexts["economy"],
            vec!["climate policy shapes the economy."]
        );
        assert_eq!(report.contexts["climate"].len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_domain_never_fetches() {
        let fetcher = FixtureFetcher::default();
        let err = analyze_article(UNKNOWN_URL, &config(&[]), &fetcher)
            .await
            .unwrap_err();
        assert!(err.is_unknown_domain());
        assert!(fetcher.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_container_is_recoverable() {
        let url = "https://www.foxnews.com/politics/story";
        let fetcher = FixtureFetcher::default().with_page(url, "<html><body><p>x.</p></body></html>");
        let err = analyze_article(url, &config(&[]), &fetcher).await.unwrap_err();
        assert!(matches!(err, ArticleError::ContainerNotFound { .. }));
    }

    #[tokio::test]
    async fn test_run_batch_continues_past_failures() {
        let fetcher = FixtureFetcher::default().with_page(NYT_URL, NYT_HTML);
        let cfg = config(&[NYT_URL, UNKNOWN_URL, "https://www.breitbart.com/missing"]);

        let outcomes = run_batch(&cfg, &fetcher, 1).await;
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_success());
        assert!(outcomes[1].result.as_ref().unwrap_err().is_unknown_domain());
        assert!(matches!(
            outcomes[2].result,
            Err(ArticleError::HttpStatus { status: 404, .. })
        ));
        assert_eq!(
            *fetcher.requested.borrow(),
            vec![NYT_URL.to_string(), "https://www.breitbart.com/missing".to_string()]
        );
    }

    #[tokio::test]
    async fn test_run_batch_preserves_order_when_concurrent() {
        let fox = "https://www.foxnews.com/a";
        let fetcher = FixtureFetcher::default()
            .with_page(NYT_URL, NYT_HTML)
            .with_page(fox, r#"<div class="article-body"><p>The economy.</p></div>"#);
        let cfg = config(&[fox, UNKNOWN_URL, NYT_URL]);

        let urls = run_batch(&cfg, &fetcher, 4)
            .await
            .into_iter()
            .map(|o| o.url)
            .collect::<Vec<_>>();
        assert_eq!(urls, vec![fox, UNKNOWN_URL, NYT_URL]);
    }

    #[tokio::test]
    async fn test_run_batch_zero_concurrency_is_sequential() {
        let fetcher = FixtureFetcher::default().with_page(NYT_URL, NYT_HTML);
        let outcomes = run_batch(&config(&[NYT_URL]), &fetcher, 0).await;
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_success());
    }

    #[tokio::test]
    async fn test_batch_report_for_known_and_unlisted_domains() {
        let fetcher = FixtureFetcher::default().with_page(NYT_URL, NYT_HTML);
        let cfg = config(&[NYT_URL, UNKNOWN_URL]);

        let outcomes = run_batch(&cfg, &fetcher, 1).await;
        let mut buf = Vec::new();
        for outcome in &outcomes {
            crate::outputs::write_outcome(
                &mut buf,
                outcome,
                &cfg.keywords,
                crate::outputs::OutputFormat::Text,
            )
            .unwrap();
        }
        let printed = String::from_utf8(buf).unwrap();

        assert!(printed.contains("(New York Times, "));
        assert!(printed.contains("Frequencies: {'climate': 3, 'economy': 0}"));
        assert!(printed.contains(&format!("Cannot parse article {UNKNOWN_URL}:")));
        assert!(printed.contains("unknown domain"));
    }
}
