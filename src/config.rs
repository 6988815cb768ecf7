//! Startup configuration: keyword and article lists plus the publisher table.
//!
//! Everything here is loaded once in `main` and then shared read-only with the
//! pipeline through [`AnalyzerConfig`].

use crate::error::ConfigError;
use crate::publishers::PublisherTable;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Immutable inputs for one batch run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Keywords to count, in configured order. Duplicates are allowed.
    pub keywords: Vec<String>,
    /// Article URLs to process, in configured order.
    pub articles: Vec<String>,
    /// Domain lookup and per-publisher extraction rules.
    pub publishers: PublisherTable,
}

/// Load a single comma-delimited record from `path`.
///
/// Only the first line is read. Fields are trimmed and empty fields dropped,
/// so `"climate, economy,"` yields `["climate", "economy"]`. An empty file
/// yields an empty list.
///
/// # Errors
///
/// [`ConfigError::NotFound`] if the file does not exist, [`ConfigError::Io`]
/// for any other read failure.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;

    let fields = parse_record(&raw);
    debug!(count = fields.len(), "Parsed delimited record");
    Ok(fields)
}

fn parse_record(raw: &str) -> Vec<String> {
    let first_line = raw
        .trim_start_matches('\u{feff}')
        .lines()
        .next()
        .unwrap_or_default();

    first_line
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
