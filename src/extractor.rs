//! Article body extraction.
//!
//! Given a fetched page and the publisher's [`PublisherRule`], locate the
//! first matching container element and flatten its `<p>` descendants into a
//! single lowercased, space-joined string.

use crate::error::ArticleError;
use crate::publishers::PublisherRule;
use scraper::{ElementRef, Html};
use tracing::{debug, instrument};

/// Extract normalized article text from an HTML page.
///
/// # Errors
///
/// [`ArticleError::ContainerNotFound`] if no element in the page satisfies
/// `rule`.
#[instrument(level = "debug", skip_all, fields(%publisher))]
pub fn extract_body(html: &str, publisher: &str, rule: &PublisherRule) -> Result<String, ArticleError> {
    let document = Html::parse_document(html);

    let container = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| rule.matches(el))
        .ok_or_else(|| ArticleError::ContainerNotFound {
            publisher: publisher.to_string(),
            tag: rule.container_tag.clone(),
        })?;

    let paragraphs = container
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>();

    debug!(paragraphs = paragraphs.len(), "Collected article paragraphs");
    Ok(paragraphs.join(" ").to_lowercase())
}
