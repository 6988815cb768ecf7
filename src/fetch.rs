//! Page fetching.
//!
//! The pipeline only needs "give me the HTML at this URL", so fetching sits
//! behind the [`PageFetcher`] trait:
//! - [`HttpFetcher`]: real fetches through a shared `reqwest::Client` with a
//!   browser-like `User-Agent` and a bounded per-request timeout
//! - tests substitute an in-memory fixture fetcher

use crate::error::{ArticleError, ConfigError};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// Default `User-Agent`. Some publishers reject requests without a browser-like one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0.2661.102 Safari/537.36";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can retrieve the HTML body of an article URL.
pub trait PageFetcher {
    /// Fetch `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, ArticleError>;
}

/// [`PageFetcher`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher sending `user_agent` on every request and giving up
    /// after `timeout`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidUserAgent`] if `user_agent` is not a legal header
    /// value, [`ConfigError::HttpClient`] if the client cannot be built.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );
        let ua = HeaderValue::from_str(user_agent).map_err(|_| ConfigError::InvalidUserAgent {
            value: user_agent.to_string(),
        })?;
        headers.insert(USER_AGENT, ua);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, ArticleError> {
        let parsed = Url::parse(url).map_err(|source| ArticleError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let t0 = Instant::now();
        let request_error = |source: reqwest::Error| ArticleError::Request {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(parsed).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Non-success HTTP status");
            return Err(ArticleError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}
