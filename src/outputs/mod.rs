//! Rendering batch outcomes to standard output.
//!
//! # Submodules
//!
//! - [`text`]: human-readable report, one block per article
//! - [`json`]: one JSON object per line, for scripting
//!
//! Both renderers write to any [`std::io::Write`] so tests can capture output.

pub mod json;
pub mod text;

use crate::models::ArticleOutcome;
use std::io::{self, Write};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render one outcome in the chosen format.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &ArticleOutcome,
    keywords: &[String],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::write_outcome(out, outcome, keywords),
        OutputFormat::Json => json::write_outcome(out, outcome),
    }
}
