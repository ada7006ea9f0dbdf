//! Tag wizard use case - suggest and assign tags across a whole collection

use std::sync::Arc;
use thiserror::Error;

use crate::{
    model::{Link, Taxonomy, WizardItem, WizardOutcome, WizardReport},
    ports::{Clock, LinkRepo, LinkStoreError, TagSuggester},
};

/// Configuration for a wizard pass
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Compute suggestions without writing them back
    pub dry_run: bool,
    /// Replace existing tags instead of merging into them
    pub overwrite_existing: bool,
    /// Leave links that already carry tags untouched
    pub skip_tagged: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            dry_run: true,
            overwrite_existing: false,
            skip_tagged: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Link store error: {0}")]
    Store(#[from] LinkStoreError),
    #[error("Taxonomy contains no tags")]
    EmptyTaxonomy,
}

/// Receives progress between links
pub trait ProgressSink: Send + Sync {
    fn on_start(&self, _total: usize) {}

    fn on_item(&self, _index: usize, _item: &WizardItem) {}

    fn on_finish(&self, _report: &WizardReport) {}
}

/// Progress sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}

/// Runs the suggester once per link, sequentially
pub struct TagWizard<S, L, C>
where
    S: TagSuggester,
    L: LinkRepo + ?Sized,
    C: Clock + ?Sized,
{
    suggester: S,
    links: Arc<L>,
    clock: Arc<C>,
    config: WizardConfig,
}

impl<S, L, C> TagWizard<S, L, C>
where
    S: TagSuggester,
    L: LinkRepo + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(suggester: S, links: Arc<L>, clock: Arc<C>, config: WizardConfig) -> Self {
        Self {
            suggester,
            links,
            clock,
            config,
        }
    }

    pub async fn run(
        &self,
        taxonomy: &Taxonomy,
        progress: &dyn ProgressSink,
    ) -> Result<WizardReport, WizardError> {
        if taxonomy.tag_count() == 0 {
            return Err(WizardError::EmptyTaxonomy);
        }

        let collection = self.links.collection().await?;
        let links = self.links.list().await?;

        tracing::info!(
            collection = %collection.title,
            links = links.len(),
            taxonomy_hash = %taxonomy.hash,
            dry_run = self.config.dry_run,
            "Starting tag wizard"
        );

        progress.on_start(links.len());

        let mut items = Vec::with_capacity(links.len());
        for (index, link) in links.iter().enumerate() {
            let item = self.process_link(link, taxonomy).await?;
            progress.on_item(index, &item);
            items.push(item);
        }

        let count = |outcome: WizardOutcome| items.iter().filter(|i| i.outcome == outcome).count();
        let report = WizardReport {
            collection: collection.title.clone(),
            taxonomy_hash: taxonomy.hash.clone(),
            generated_at: self.clock.now(),
            dry_run: self.config.dry_run,
            total: items.len(),
            updated: count(WizardOutcome::Updated),
            unchanged: count(WizardOutcome::Unchanged),
            skipped: count(WizardOutcome::Skipped),
            items,
        };

        tracing::info!(
            total = report.total,
            updated = report.updated,
            unchanged = report.unchanged,
            skipped = report.skipped,
            "Tag wizard finished"
        );

        progress.on_finish(&report);
        Ok(report)
    }

    async fn process_link(
        &self,
        link: &Link,
        taxonomy: &Taxonomy,
    ) -> Result<WizardItem, WizardError> {
        if self.config.skip_tagged && !link.tags.is_empty() {
            tracing::debug!(link_id = %link.id, "Skipping already tagged link");
            return Ok(WizardItem {
                link_id: link.id.clone(),
                title: link.title.clone(),
                suggested: vec![],
                tags: link.tags.clone(),
                outcome: WizardOutcome::Skipped,
            });
        }

        // suggesters are not bound to any order
        let suggested = taxonomy.order_by_taxonomy(
            &self
                .suggester
                .suggest_tags(&link.content(), &taxonomy.categories),
        );
        let tags = self.combine(&link.tags, &suggested);

        let outcome = if tags == link.tags {
            WizardOutcome::Unchanged
        } else {
            if !self.config.dry_run {
                self.links.set_tags(&link.id, &tags).await?;
            }
            WizardOutcome::Updated
        };

        tracing::debug!(
            link_id = %link.id,
            suggested = ?suggested,
            outcome = ?outcome,
            "Processed link"
        );

        Ok(WizardItem {
            link_id: link.id.clone(),
            title: link.title.clone(),
            suggested,
            tags,
            outcome,
        })
    }

    /// Merge keeps existing tags first; overwrite never clears a link when
    /// nothing was suggested.
    fn combine(&self, existing: &[String], suggested: &[String]) -> Vec<String> {
        if self.config.overwrite_existing {
            if suggested.is_empty() {
                return existing.to_vec();
            }
            return suggested.to_vec();
        }

        let mut tags = existing.to_vec();
        for tag in suggested {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}
