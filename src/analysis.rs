//! Keyword frequency and sentence-context scanning.
//!
//! Both scans are case-insensitive: the text and each keyword are lowercased
//! before comparison, and results are keyed by the keyword as configured.

use regex::Regex;
use std::collections::BTreeMap;
use tracing::warn;

/// Keyword -> number of standalone token occurrences.
pub type FrequencyResult = BTreeMap<String, usize>;

/// Keyword -> sentence fragments containing it, in text order.
pub type ContextResult = BTreeMap<String, Vec<String>>;

/// Count whitespace-delimited tokens equal to each keyword.
///
/// Every keyword gets an entry, zero included. Tokens are not stripped of
/// punctuation, so `"climate,"` does not count toward `climate`.
pub fn frequencies(text: &str, keywords: &[String]) -> FrequencyResult {
    let text = text.to_lowercase();
    let tokens = text.split_whitespace().collect::<Vec<_>>();

    keywords
        .iter()
        .map(|keyword| {
            let needle = keyword.to_lowercase();
            let count = tokens.iter().filter(|t| **t == needle).count();
            (keyword.clone(), count)
        })
        .collect()
}

/// Collect every period-terminated run of text containing each keyword.
///
/// The match is a substring search, so `cat` also hits `category`.
pub fn contexts(text: &str, keywords: &[String]) -> ContextResult {
    let text = text.to_lowercase();

    keywords
        .iter()
        .map(|keyword| {
            let snippets = match sentence_pattern(keyword) {
                Some(re) => re
                    .find_iter(&text)
                    .map(|m| m.as_str().to_string())
                    .collect(),
                None => Vec::new(),
            };
            (keyword.clone(), snippets)
        })
        .collect()
}

fn sentence_pattern(keyword: &str) -> Option<Regex> {
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    match Regex::new(&format!(r"[^.]*{}[^.]*\.", regex::escape(&needle))) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(%keyword, error = %e, "Could not build context pattern");
            None
        }
    }
}
