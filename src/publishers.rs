//! Publisher resolution and per-publisher extraction rules.
//!
//! A [`PublisherTable`] holds two maps:
//!
//! | Map | Key | Value |
//! |-----|-----|-------|
//! | `domains` | exact URL host, e.g. `www.nytimes.com` | publisher name |
//! | `rules` | publisher name | [`PublisherRule`] locating the article body |
//!
//! The built-in table covers five publishers. A YAML file with the same shape
//! can replace it at startup (see [`PublisherTable::from_yaml_file`]).

use crate::error::{ArticleError, ConfigError};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

static HOST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https://([^/?#]+)").unwrap());

/// How to find the element that holds a publisher's article text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherRule {
    /// Tag name of the container, e.g. `section` or `div`.
    pub container_tag: String,
    /// Attribute constraints the container must satisfy.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl PublisherRule {
    pub fn new(container_tag: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            container_tag: container_tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Whether `element` is a container for this rule.
    ///
    /// A single-token `class` constraint matches any element carrying that
    /// class. A multi-token `class` constraint, and every other attribute,
    /// must equal the element's attribute value exactly.
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let el = element.value();
        if !el.name().eq_ignore_ascii_case(&self.container_tag) {
            return false;
        }

        self.attributes.iter().all(|(name, expected)| {
            let Some(actual) = el.attr(name) else {
                return false;
            };
            if name == "class" && !expected.trim().contains(char::is_whitespace) {
                actual.split_whitespace().any(|class| class == expected.trim())
            } else {
                actual == expected
            }
        })
    }
}

/// Domain lookup plus extraction rules, immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherTable {
    pub domains: BTreeMap<String, String>,
    pub rules: BTreeMap<String, PublisherRule>,
}

impl Default for PublisherTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PublisherTable {
    /// The built-in table of supported publishers.
    pub fn builtin() -> Self {
        let domains = [
            ("www.huffpost.com", "Huffington Post"),
            ("www.nytimes.com", "New York Times"),
            ("www.apnews.com", "Associated Press"),
            ("www.foxnews.com", "Fox News"),
            ("www.breitbart.com", "Breitbart"),
        ];
        let rules = [
            (
                "Huffington Post",
                PublisherRule::new("section", &[("class", "entry__content-list js-entry-content")]),
            ),
            ("New York Times", PublisherRule::new("section", &[("name", "articleBody")])),
            ("Associated Press", PublisherRule::new("div", &[("class", "Article")])),
            ("Fox News", PublisherRule::new("div", &[("class", "article-body")])),
            ("Breitbart", PublisherRule::new("div", &[("class", "entry-content")])),
        ];

        Self {
            domains: domains
                .into_iter()
                .map(|(host, name)| (host.to_string(), name.to_string()))
                .collect(),
            rules: rules
                .into_iter()
                .map(|(name, rule)| (name.to_string(), rule))
                .collect(),
        }
    }

    /// Load a publisher table from a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or unreadable, is not valid YAML of the
    /// expected shape, or maps a domain to a publisher with no rule.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;

        let table: PublisherTable =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Yaml {
                path: path.display().to_string(),
                source,
            })?;
        table.validate()?;
        info!(
            domains = table.domains.len(),
            publishers = table.rules.len(),
            "Loaded publisher table"
        );
        Ok(table)
    }

    /// Check that every domain points at a publisher with a rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (domain, publisher) in &self.domains {
            if !self.rules.contains_key(publisher) {
                return Err(ConfigError::MissingRule {
                    domain: domain.clone(),
                    publisher: publisher.clone(),
                });
            }
        }
        Ok(())
    }

    /// Map an article URL to its publisher name.
    ///
    /// The host is taken from `https://<host>/...` and looked up exactly
    /// (case-sensitive, no subdomain folding).
    ///
    /// # Errors
    ///
    /// [`ArticleError::UnknownDomain`] if the URL is not `https://` or the
    /// host is not in the table.
    pub fn resolve(&self, url: &str) -> Result<&str, ArticleError> {
        let host = HOST_RE
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        match host.and_then(|h| self.domains.get(h)) {
            Some(publisher) => {
                debug!(%url, %publisher, "Resolved publisher");
                Ok(publisher.as_str())
            }
            None => Err(ArticleError::UnknownDomain {
                url: url.to_string(),
            }),
        }
    }

    /// Extraction rule for a publisher.
    pub fn rule_for(&self, publisher: &str) -> Result<&PublisherRule, ArticleError> {
        self.rules
            .get(publisher)
            .ok_or_else(|| ArticleError::MissingRule {
                publisher: publisher.to_string(),
            })
    }
}
