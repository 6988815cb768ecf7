//! Data models for per-article results.
//!
//! - [`ArticleReport`]: the keyword analysis of one successfully extracted article
//! - [`ArticleOutcome`]: a report or the reason the article was skipped, labeled by URL
//! - [`BatchSummary`]: success/failure counts across a batch

use crate::analysis::{ContextResult, FrequencyResult};
use crate::error::ArticleError;
use serde::Serialize;

/// Keyword analysis of one article.
///
/// Built fresh for each article and discarded after printing; nothing is
/// aggregated across articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleReport {
    /// The article URL as configured.
    pub url: String,
    /// Publisher name resolved from the URL host.
    pub publisher: String,
    /// Number of whitespace-delimited tokens in the extracted text.
    pub word_count: usize,
    /// Occurrence count per keyword.
    pub frequencies: FrequencyResult,
    /// Sentence snippets per keyword.
    pub contexts: ContextResult,
}

/// Result of processing one article URL.
#[derive(Debug)]
pub struct ArticleOutcome {
    pub url: String,
    pub result: Result<ArticleReport, ArticleError>,
}

impl ArticleOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Counts across a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[ArticleOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}
