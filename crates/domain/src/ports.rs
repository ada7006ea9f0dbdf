//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::model::{ContentItem, Link, Supercuration, TagCategory};

/// Anything that can propose tag labels for a piece of content.
///
/// Implementations must be pure: the result depends only on the arguments.
pub trait TagSuggester: Send + Sync {
    /// Matched labels, each taken verbatim from some category, no duplicates
    fn suggest_tags(&self, item: &ContentItem, categories: &[TagCategory]) -> Vec<String>;
}

impl<T: TagSuggester + ?Sized> TagSuggester for &T {
    fn suggest_tags(&self, item: &ContentItem, categories: &[TagCategory]) -> Vec<String> {
        (**self).suggest_tags(item, categories)
    }
}

/// Error type for taxonomy repository
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },
    #[error("No categories found in {0}")]
    Empty(String),
    #[error("Duplicate category ID '{id}'")]
    DuplicateId { id: String },
    #[error("Invalid category ID '{id}': must match [a-z0-9_-]+")]
    InvalidId { id: String },
    #[error("Unsupported taxonomy format: {0}")]
    UnsupportedFormat(String),
}

/// Port for loading and saving a taxonomy
#[async_trait]
pub trait TaxonomyRepo: Send + Sync {
    /// Load all categories in display order
    async fn load(&self) -> Result<Vec<TagCategory>, TaxonomyError>;

    /// Validate the stored taxonomy
    async fn validate(&self) -> Result<(), TaxonomyError>;

    /// Replace the stored taxonomy
    async fn save(&self, categories: &[TagCategory]) -> Result<(), TaxonomyError>;
}

/// Error type for link store operations
#[derive(Debug, Error)]
pub enum LinkStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Link not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for the persistent link/collection store
#[async_trait]
pub trait LinkRepo: Send + Sync {
    /// The collection these links belong to
    async fn collection(&self) -> Result<Supercuration, LinkStoreError>;

    /// All links in the collection
    async fn list(&self) -> Result<Vec<Link>, LinkStoreError>;

    /// Replace the tags assigned to a link
    async fn set_tags(&self, link_id: &str, tags: &[String]) -> Result<(), LinkStoreError>;
}

/// Port for time/clock operations (enables deterministic testing)
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
