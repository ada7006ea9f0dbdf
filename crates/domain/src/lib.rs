//! link-curator domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Domain entities and value objects
//! - `analysis`: Tag suggestion engine and starter taxonomy
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Application use cases / business logic

pub mod analysis;
pub mod model;
pub mod ports;
pub mod usecases;

pub use analysis::{ContentAnalyzer, TaxonomySuggester};
pub use model::*;
pub use ports::*;

/// Labels from `categories` that plausibly apply to `item`
pub fn suggest_tags(item: &ContentItem, categories: &[TagCategory]) -> Vec<String> {
    ContentAnalyzer::new().suggest_tags(item, categories)
}

/// Starter "Topics", "Content Type" and "Level" categories for a corpus
pub fn suggest_taxonomy(corpus: &[ContentItem]) -> Vec<TagCategory> {
    TaxonomySuggester::new().suggest(corpus)
}
