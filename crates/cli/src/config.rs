//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub wizard: WizardSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_taxonomy_path")]
    pub taxonomy_path: PathBuf,

    #[serde(default = "default_links_path")]
    pub links_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSection {
    #[serde(default = "default_true")]
    pub dry_run: bool,

    #[serde(default)]
    pub overwrite_existing: bool,

    #[serde(default)]
    pub skip_tagged: bool,
}

// Default value functions
fn default_taxonomy_path() -> PathBuf {
    PathBuf::from("./taxonomy.json")
}

fn default_links_path() -> PathBuf {
    PathBuf::from("./links.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            taxonomy_path: default_taxonomy_path(),
            links_path: default_links_path(),
            log_level: default_log_level(),
        }
    }
}

impl Default for WizardSection {
    fn default() -> Self {
        Self {
            dry_run: default_true(),
            overwrite_existing: false,
            skip_tagged: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("LINK_CURATOR")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# link-curator configuration

[general]
# .json or .toml
taxonomy_path = "./taxonomy.json"
links_path = "./links.json"
log_level = "info"

[wizard]
dry_run = true
# replace existing tags instead of merging suggestions into them
overwrite_existing = false
# leave links that already have tags untouched
skip_tagged = false
"#
        .to_string()
    }
}
