//! Command-line interface definitions.
//!
//! Input file locations can come from flags or environment variables; every
//! option has a default so a bare invocation reads `keywords.txt` and
//! `articles.txt` from the working directory.

use crate::fetch::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::outputs::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Count keywords and collect their sentence contexts across news articles.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./keywords.txt and ./articles.txt
/// article_keywords
///
/// # Custom inputs, a replacement publisher table, JSON Lines output
/// article_keywords -k kw.txt -a urls.txt -p publishers.yaml --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Single-line, comma-delimited keyword list
    #[arg(short, long, env = "ARTICLE_KEYWORDS_FILE", default_value = "keywords.txt")]
    pub keywords: PathBuf,

    /// Single-line, comma-delimited article URL list
    #[arg(short, long, env = "ARTICLE_URLS_FILE", default_value = "articles.txt")]
    pub articles: PathBuf,

    /// Optional YAML publisher table replacing the built-in one
    #[arg(short, long, env = "ARTICLE_PUBLISHERS_FILE")]
    pub publishers: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of articles fetched at once (1 = strictly sequential)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Print one JSON object per article instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
