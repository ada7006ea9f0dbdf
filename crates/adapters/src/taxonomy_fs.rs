//! Filesystem-based taxonomy repository (JSON or TOML)

use async_trait::async_trait;
use link_curator_domain::{TagCategory, TaxonomyError, TaxonomyRepo};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    categories: Vec<TagCategory>,
}

/// Filesystem taxonomy repository
pub struct FsTaxonomyRepo {
    path: PathBuf,
    format: Format,
    id_pattern: Regex,
}

impl FsTaxonomyRepo {
    /// Create a repo for `path`; the extension picks the format
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let path = path.as_ref().to_path_buf();

        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            _ => {
                return Err(TaxonomyError::UnsupportedFormat(
                    path.display().to_string(),
                ));
            }
        };

        let id_pattern = Regex::new(r"^[a-z0-9_-]+$").expect("Valid regex");

        Ok(Self {
            path,
            format,
            id_pattern,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<TaxonomyFile, TaxonomyError> {
        let parse_error = |message: String| TaxonomyError::Parse {
            file: self.path.display().to_string(),
            message,
        };

        match self.format {
            Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }

    fn render(&self, file: &TaxonomyFile) -> Result<String, TaxonomyError> {
        let parse_error = |message: String| TaxonomyError::Parse {
            file: self.path.display().to_string(),
            message,
        };

        match self.format {
            Format::Json => {
                serde_json::to_string_pretty(file).map_err(|e| parse_error(e.to_string()))
            }
            Format::Toml => toml::to_string_pretty(file).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Check ids and warn about repeated labels
    fn check(&self, categories: &[TagCategory]) -> Result<(), TaxonomyError> {
        if categories.is_empty() {
            return Err(TaxonomyError::Empty(self.path.display().to_string()));
        }

        let mut ids_seen = HashSet::new();
        for category in categories {
            if !self.id_pattern.is_match(&category.id) {
                return Err(TaxonomyError::InvalidId {
                    id: category.id.clone(),
                });
            }
            if !ids_seen.insert(category.id.as_str()) {
                return Err(TaxonomyError::DuplicateId {
                    id: category.id.clone(),
                });
            }

            let mut tags_seen = HashSet::new();
            for tag in &category.tags {
                if !tags_seen.insert(tag.as_str()) {
                    tracing::warn!(
                        category = %category.id,
                        tag = %tag,
                        "Duplicate tag in category"
                    );
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl TaxonomyRepo for FsTaxonomyRepo {
    async fn load(&self) -> Result<Vec<TagCategory>, TaxonomyError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file = self.parse(&content)?;

        self.check(&file.categories)?;

        tracing::debug!(
            path = %self.path.display(),
            categories = file.categories.len(),
            "Loaded taxonomy"
        );

        Ok(file.categories)
    }

    async fn validate(&self) -> Result<(), TaxonomyError> {
        // Load will perform validation
        let _ = self.load().await?;
        Ok(())
    }

    async fn save(&self, categories: &[TagCategory]) -> Result<(), TaxonomyError> {
        self.check(categories)?;

        let content = self.render(&TaxonomyFile {
            categories: categories.to_vec(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, content).await?;

        tracing::info!(
            path = %self.path.display(),
            categories = categories.len(),
            "Saved taxonomy"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn category(id: &str, tags: &[&str]) -> TagCategory {
        TagCategory::new(
            id,
            id.to_uppercase(),
            "#10B981",
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[tokio::test]
    async fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taxonomy.json");
        std::fs::write(
            &path,
            r##"{"categories": [
                {"id": "topics", "name": "Topics", "color": "#3B82F6", "tags": ["AI", "Frontend"]},
                {"id": "format", "name": "Format"}
            ]}"##,
        )
        .unwrap();

        let repo = FsTaxonomyRepo::new(&path).unwrap();
        let categories = repo.load().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].tags, vec!["AI", "Frontend"]);
        assert!(categories[1].tags.is_empty());
    }

    #[tokio::test]
    async fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taxonomy.toml");
        std::fs::write(
            &path,
            r##"
[[categories]]
id = "level"
name = "Level"
color = "#F59E0B"
tags = ["Beginner", "Advanced"]
"##,
        )
        .unwrap();

        let categories = FsTaxonomyRepo::new(&path).unwrap().load().await.unwrap();
        assert_eq!(categories[0].name, "Level");
        assert_eq!(categories[0].tags.len(), 2);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("taxonomy.toml");
        let repo = FsTaxonomyRepo::new(&path).unwrap();

        let categories = vec![category("topics", &["rust"]), category("level", &[])];
        repo.save(&categories).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), categories);
    }

    #[tokio::test]
    async fn test_duplicate_id_error() {
        let dir = TempDir::new().unwrap();
        let repo = FsTaxonomyRepo::new(dir.path().join("t.json")).unwrap();

        let result = repo
            .save(&[category("topics", &[]), category("topics", &[])])
            .await;
        assert!(matches!(result, Err(TaxonomyError::DuplicateId { .. })));
    }

    #[tokio::test]
    async fn test_invalid_id_error() {
        let dir = TempDir::new().unwrap();
        let repo = FsTaxonomyRepo::new(dir.path().join("t.json")).unwrap();

        let result = repo.save(&[category("Bad Id", &[])]).await;
        assert!(matches!(result, Err(TaxonomyError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_empty_taxonomy_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.json");
        std::fs::write(&path, "{}").unwrap();

        let result = FsTaxonomyRepo::new(&path).unwrap().validate().await;
        assert!(matches!(result, Err(TaxonomyError::Empty(_))));
    }

    #[tokio::test]
    async fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FsTaxonomyRepo::new(&path).unwrap().load().await;
        assert!(matches!(result, Err(TaxonomyError::Parse { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = FsTaxonomyRepo::new("/tmp/taxonomy.yaml");
        assert!(matches!(result, Err(TaxonomyError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let repo = FsTaxonomyRepo::new("/nonexistent/taxonomy.json").unwrap();
        assert!(matches!(repo.load().await, Err(TaxonomyError::Io(_))));
    }
}
