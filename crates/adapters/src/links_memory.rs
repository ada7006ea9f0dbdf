//! In-memory link store for testing and dry runs

use async_trait::async_trait;
use link_curator_domain::{Link, LinkRepo, LinkStoreError, Supercuration};
use std::sync::RwLock;

/// In-memory link store implementation
pub struct InMemoryLinkRepo {
    collection: Supercuration,
    links: RwLock<Vec<Link>>,
}

impl InMemoryLinkRepo {
    pub fn new(collection: Supercuration, links: Vec<Link>) -> Self {
        Self {
            collection,
            links: RwLock::new(links),
        }
    }

    /// Tags currently assigned to a link
    pub fn tags_of(&self, link_id: &str) -> Option<Vec<String>> {
        self.links
            .read()
            .ok()?
            .iter()
            .find(|l| l.id == link_id)
            .map(|l| l.tags.clone())
    }
}

impl Default for InMemoryLinkRepo {
    fn default() -> Self {
        Self::new(Supercuration::default(), vec![])
    }
}

#[async_trait]
impl LinkRepo for InMemoryLinkRepo {
    async fn collection(&self) -> Result<Supercuration, LinkStoreError> {
        Ok(self.collection.clone())
    }

    async fn list(&self) -> Result<Vec<Link>, LinkStoreError> {
        let links = self
            .links
            .read()
            .map_err(|e| LinkStoreError::Storage(e.to_string()))?;
        Ok(links.clone())
    }

    async fn set_tags(&self, link_id: &str, tags: &[String]) -> Result<(), LinkStoreError> {
        let mut links = self
            .links
            .write()
            .map_err(|e| LinkStoreError::Storage(e.to_string()))?;
        let link = links
            .iter_mut()
            .find(|l| l.id == link_id)
            .ok_or_else(|| LinkStoreError::NotFound(link_id.to_string()))?;
        link.tags = tags.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use link_curator_domain::{
        ContentAnalyzer, SystemClock, TagCategory, Taxonomy,
        usecases::{NoProgress, TagWizard, WizardConfig},
    };
    use std::sync::Arc;

    fn link(id: &str) -> Link {
        Link {
            id: id.to_string(),
            url: String::new(),
            title: format!("Link {id}"),
            description: String::new(),
            thumbnail: None,
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_set_and_read_tags() {
        let repo = InMemoryLinkRepo::new(Supercuration::default(), vec![link("1"), link("2")]);

        repo.set_tags("2", &["AI".to_string()]).await.unwrap();

        assert_eq!(repo.tags_of("2"), Some(vec!["AI".to_string()]));
        assert_eq!(repo.tags_of("1"), Some(vec![]));
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_link() {
        let repo = InMemoryLinkRepo::default();
        let result = repo.set_tags("nope", &[]).await;
        assert!(matches!(result, Err(LinkStoreError::NotFound(_))));
        assert_eq!(repo.tags_of("nope"), None);
    }

    #[tokio::test]
    async fn test_wizard_applies_analyzer_tags() {
        let mut guide = link("1");
        guide.title = "A guide to cooking pasta".to_string();
        guide.description = "step by step instructions".to_string();
        let mut picnic = link("2");
        picnic.title = "Sunny picnic by the lake".to_string();
        picnic.tags = vec!["Outdoors".to_string()];

        let repo = Arc::new(InMemoryLinkRepo::new(
            Supercuration::default(),
            vec![guide, picnic],
        ));
        let taxonomy = Taxonomy::new(vec![TagCategory::new(
            "format",
            "Format",
            "#10B981",
            vec!["Tutorial".to_string(), "Video".to_string()],
        )]);
        let config = WizardConfig {
            dry_run: false,
            ..Default::default()
        };

        let wizard = TagWizard::new(
            ContentAnalyzer::new(),
            repo.clone(),
            Arc::new(SystemClock),
            config,
        );
        let report = wizard.run(&taxonomy, &NoProgress).await.unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.unchanged, 1);
        assert_eq!(repo.tags_of("1"), Some(vec!["Tutorial".to_string()]));
        assert_eq!(repo.tags_of("2"), Some(vec!["Outdoors".to_string()]));
    }
}
