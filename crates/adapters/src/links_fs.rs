//! JSON-file link store

use async_trait::async_trait;
use link_curator_domain::{Link, LinkRepo, LinkStoreError, Supercuration};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// On-disk document: one collection and its links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksDocument {
    #[serde(default)]
    pub supercuration: Supercuration,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Link store backed by a single JSON document.
///
/// Every write rewrites the whole file through a sibling temp file.
pub struct FsLinkRepo {
    path: PathBuf,
    // serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FsLinkRepo {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LinkStoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(LinkStoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Links file not found: {}", path.display()),
            )));
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<LinksDocument, LinkStoreError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| {
            LinkStoreError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn write(&self, document: &LinksDocument) -> Result<(), LinkStoreError> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| LinkStoreError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl LinkRepo for FsLinkRepo {
    async fn collection(&self) -> Result<Supercuration, LinkStoreError> {
        Ok(self.read().await?.supercuration)
    }

    async fn list(&self) -> Result<Vec<Link>, LinkStoreError> {
        Ok(self.read().await?.links)
    }

    async fn set_tags(&self, link_id: &str, tags: &[String]) -> Result<(), LinkStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read().await?;
        let link = document
            .links
            .iter_mut()
            .find(|l| l.id == link_id)
            .ok_or_else(|| LinkStoreError::NotFound(link_id.to_string()))?;
        link.tags = tags.to_vec();

        self.write(&document).await?;

        tracing::debug!(link_id = %link_id, tags = ?tags, "Updated link tags");
        Ok(())
    }
}
