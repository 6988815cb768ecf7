//! Error types for configuration loading and per-article processing.
//!
//! Two families exist because they are handled differently:
//! - [`ConfigError`]: anything that prevents the batch from starting. These are
//!   fatal and terminate the process with a non-zero status.
//! - [`ArticleError`]: anything that goes wrong for one article URL. These are
//!   logged, reported, and the batch moves on to the next URL.

use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading keyword, article, or publisher configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File {path} not found")]
    NotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid publisher table in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Publisher \"{publisher}\" (domain {domain}) has no extraction rule")]
    MissingRule { domain: String, publisher: String },

    #[error("Invalid User-Agent header value {value:?}")]
    InvalidUserAgent { value: String },

    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },
}

impl ConfigError {
    /// Classify a read failure for `path`; a missing file becomes [`ConfigError::NotFound`].
    pub fn from_io(path: &Path, e: std::io::Error) -> Self {
        let path = path.display().to_string();
        match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound { path },
            _ => ConfigError::Io { path, source: e },
        }
    }
}

/// Recoverable errors for a single article.
#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("unknown domain: cannot find news source for article \"{url}\". Is the domain listed?")]
    UnknownDomain { url: String },

    #[error("no extraction rule configured for publisher \"{publisher}\"")]
    MissingRule { publisher: String },

    #[error("invalid article URL \"{url}\": {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("no <{tag}> article body container found for {publisher}")]
    ContainerNotFound { publisher: String, tag: String },
}

impl ArticleError {
    /// Returns true if the URL's host is not in the domain table.
    pub fn is_unknown_domain(&self) -> bool {
        matches!(self, ArticleError::UnknownDomain { .. })
    }
}
