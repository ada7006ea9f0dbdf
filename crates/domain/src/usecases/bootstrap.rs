//! Taxonomy bootstrap use case - starter categories for one collection

use std::sync::Arc;

use crate::{
    analysis::TaxonomySuggester,
    model::{ContentItem, TagCategory},
    ports::{LinkRepo, LinkStoreError},
};

/// Derives a starter taxonomy from the links already saved in a collection
pub struct BootstrapTaxonomy<L: LinkRepo + ?Sized> {
    links: Arc<L>,
    suggester: TaxonomySuggester,
}

impl<L: LinkRepo + ?Sized> BootstrapTaxonomy<L> {
    pub fn new(links: Arc<L>) -> Self {
        Self {
            links,
            suggester: TaxonomySuggester::new(),
        }
    }

    pub async fn run(&self) -> Result<Vec<TagCategory>, LinkStoreError> {
        let collection = self.links.collection().await?;
        let corpus: Vec<ContentItem> = self
            .links
            .list()
            .await?
            .iter()
            .map(|link| link.content())
            .collect();

        tracing::info!(
            collection = %collection.title,
            links = corpus.len(),
            "Suggesting starter taxonomy"
        );

        Ok(self.suggester.suggest(&corpus))
    }
}
