//! Plain-text report.
//!
//! Successful articles print a header, the frequency mapping, and the context
//! snippets per keyword. Skipped articles print the URL, the reason, and a
//! note that the batch continues.

use crate::models::{ArticleOutcome, ArticleReport};
use itertools::Itertools;
use std::io::{self, Write};

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &ArticleOutcome,
    keywords: &[String],
) -> io::Result<()> {
    match &outcome.result {
        Ok(report) => write_report(out, report, keywords),
        Err(e) => {
            writeln!(out, "\nCannot parse article {}:", outcome.url)?;
            writeln!(out, "{e}")?;
            writeln!(out, "Continuing to parse...\n")
        }
    }
}

fn write_report<W: Write>(out: &mut W, report: &ArticleReport, keywords: &[String]) -> io::Result<()> {
    writeln!(
        out,
        "== {} ({}, {} words)",
        report.url, report.publisher, report.word_count
    )?;

    let ordered = keywords.iter().unique().collect::<Vec<_>>();
    let freq_line = ordered
        .iter()
        .map(|k| format!("'{}': {}", k, report.frequencies.get(*k).copied().unwrap_or(0)))
        .join(", ");
    writeln!(out, "Frequencies: {{{freq_line}}}")?;

    writeln!(out, "Contexts:")?;
    for keyword in ordered {
        let snippets = report.contexts.get(keyword).map(Vec::as_slice).unwrap_or(&[]);
        if snippets.is_empty() {
            writeln!(out, "  {keyword}: (none)")?;
            continue;
        }
        writeln!(out, "  {keyword}:")?;
        for snippet in snippets {
            writeln!(out, "    - \"{}\"", snippet.trim())?;
        }
    }
    Ok(())
}
