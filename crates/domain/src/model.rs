//! Domain models and value objects

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use time::OffsetDateTime;

/// A named, colored group of tag labels shown together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCategory {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display color (hex string)
    #[serde(default)]
    pub color: String,
    /// Tag labels in display order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TagCategory {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            tags,
        }
    }
}

/// The only fields of a saved link the analyzer reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Title and description joined by a single space, lower-cased
    pub fn normalized_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// A saved link inside a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Tag labels currently assigned
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Link {
    pub fn content(&self) -> ContentItem {
        ContentItem::new(self.title.clone(), self.description.clone())
    }
}

/// A collection of links ("supercuration")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supercuration {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// An ordered list of tag categories with a content fingerprint
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// Categories in caller order
    pub categories: Vec<TagCategory>,
    /// SHA-256 over ids, names and tags
    pub hash: String,
}

impl Taxonomy {
    pub fn new(categories: Vec<TagCategory>) -> Self {
        let hash = compute_taxonomy_hash(&categories);
        Self { categories, hash }
    }

    /// Total number of tag labels across all categories
    pub fn tag_count(&self) -> usize {
        self.categories.iter().map(|c| c.tags.len()).sum()
    }

    /// Re-sort labels into taxonomy display order.
    ///
    /// Labels that are not part of the taxonomy keep their relative order
    /// and go last.
    pub fn order_by_taxonomy(&self, labels: &[String]) -> Vec<String> {
        let wanted: HashSet<&str> = labels.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        let mut ordered = Vec::with_capacity(labels.len());

        for tag in self.categories.iter().flat_map(|c| c.tags.iter()) {
            if wanted.contains(tag.as_str()) && seen.insert(tag.as_str()) {
                ordered.push(tag.clone());
            }
        }
        for label in labels {
            if seen.insert(label.as_str()) {
                ordered.push(label.clone());
            }
        }
        ordered
    }
}

/// Compute a deterministic hash of a taxonomy, used to detect stale suggestions
pub fn compute_taxonomy_hash(categories: &[TagCategory]) -> String {
    let mut hasher = Sha256::new();
    for category in categories {
        hasher.update(category.id.as_bytes());
        hasher.update([0u8]);
        hasher.update(category.name.as_bytes());
        hasher.update([0u8]);
        for tag in &category.tags {
            hasher.update(tag.as_bytes());
            hasher.update([0u8]);
        }
        hasher.update([1u8]);
    }
    format!("{:x}", hasher.finalize())
}

/// Which step of the matching cascade accepted a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Tag text appears verbatim in the content
    Direct,
    /// Every word of a multi-word tag matches the content
    Fuzzy,
    /// A related term matches an extracted keyword
    Keyword,
    /// A related term matches a detected concept
    Semantic,
    /// A context phrase matches the content
    Context,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Fuzzy => "fuzzy",
            Self::Keyword => "keyword",
            Self::Semantic => "semantic",
            Self::Context => "context",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tag accepted for a piece of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMatch {
    /// Tag label, verbatim from the category
    pub tag: String,
    /// Category the tag was evaluated under
    pub category_id: String,
    pub strategy: MatchStrategy,
}

/// Per-link outcome of a wizard pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardItem {
    pub link_id: String,
    pub title: String,
    /// Labels the analyzer suggested
    pub suggested: Vec<String>,
    /// Tags the link carries after the pass
    pub tags: Vec<String>,
    pub outcome: WizardOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardOutcome {
    /// Tags changed (persisted unless dry run)
    Updated,
    /// Suggestions added nothing new
    Unchanged,
    /// Link already had tags and skip_tagged is on
    Skipped,
}

/// Summary of a wizard pass over one collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardReport {
    pub collection: String,
    pub taxonomy_hash: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub dry_run: bool,
    pub total: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub items: Vec<WizardItem>,
}
