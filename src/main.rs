//! # Article Keywords
//!
//! Fetches a list of news article URLs, extracts each article's body text
//! with a per-publisher HTML rule, and reports how often each configured
//! keyword occurs along with the sentences it occurs in.
//!
//! ## Usage
//!
//! ```sh
//! article_keywords -k keywords.txt -a articles.txt
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: load keyword and URL lists plus the publisher table
//! 2. **Resolution**: map each URL host to a known publisher
//! 3. **Extraction**: fetch the page and flatten the publisher's body container
//! 4. **Analysis**: keyword frequencies and sentence contexts, printed per article
//!
//! Only configuration errors are fatal. A failed article is reported and the
//! batch moves on.

use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod error;
mod extractor;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod publishers;

use cli::Cli;
use config::{AnalyzerConfig, load_list};
use crate::error::ConfigError;
use fetch::HttpFetcher;
use publishers::PublisherTable;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("Initializing article keyword analyzer");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let startup = load_config(&args)
        .and_then(|config| Ok((config, HttpFetcher::new(&args.user_agent, args.timeout())?)));
    let (config, fetcher) = match startup {
        Ok(ready) => ready,
        Err(e) => {
            error!(error = %e, "Cannot load configuration; exiting");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let outcomes = pipeline::run_batch(&config, &fetcher, usize::from(args.concurrency)).await;

    let mut stdout = io::stdout().lock();
    for outcome in &outcomes {
        outputs::write_outcome(&mut stdout, outcome, &config.keywords, args.output_format())?;
    }
    stdout.flush()?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        millis = elapsed.as_millis() as u64,
        "Execution complete"
    );
    Ok(())
}

/// Build the immutable run configuration from CLI arguments.
fn load_config(args: &Cli) -> Result<AnalyzerConfig, ConfigError> {
    info!(path = %args.keywords.display(), "Loading keywords");
    let keywords = load_list(&args.keywords)?;
    info!(count = keywords.len(), ?keywords, "Parsed keywords");

    info!(path = %args.articles.display(), "Loading articles");
    let articles = load_list(&args.articles)?;
    info!(count = articles.len(), ?articles, "Parsed articles");

    let publishers = match &args.publishers {
        Some(path) => PublisherTable::from_yaml_file(path)?,
        None => PublisherTable::builtin(),
    };
    info!(domains = publishers.domains.len(), "Initialized publisher table");

    Ok(AnalyzerConfig {
        keywords,
        articles,
        publishers,
    })
}
