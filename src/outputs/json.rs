//! JSON Lines output.
//!
//! Each outcome becomes one line: a serialized [`ArticleReport`] on success,
//! or `{"url": ..., "error": ...}` when the article was skipped.
//!
//! [`ArticleReport`]: crate::models::ArticleReport

use crate::models::ArticleOutcome;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct FailedArticle<'a> {
    url: &'a str,
    error: String,
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &ArticleOutcome) -> io::Result<()> {
    let line = match &outcome.result {
        Ok(report) => serde_json::to_string(report)?,
        Err(e) => serde_json::to_string(&FailedArticle {
            url: &outcome.url,
            error: e.to_string(),
        })?,
    };
    writeln!(out, "{line}")
}
