//! Suggest command - tag suggestions for one piece of content

use anyhow::{Context, Result};
use link_curator_adapters::taxonomy::FilesystemTaxonomyRepo;
use link_curator_domain::{ContentAnalyzer, ContentItem, TagCategory, TaxonomyRepo};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::args::SuggestArgs;
use crate::config::AppConfig;

pub async fn execute(args: SuggestArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    if args.title.is_none() && args.description.is_none() && args.file.is_none() {
        anyhow::bail!("No content provided: pass --title/--description or --file");
    }

    let item = get_input_item(&args)?;

    let taxonomy_path = args
        .taxonomy
        .as_ref()
        .unwrap_or(&config.general.taxonomy_path);
    let categories = load_categories(taxonomy_path).await?;

    tracing::info!(
        categories = categories.len(),
        title = %item.title,
        "Suggesting tags"
    );

    let analyzer = ContentAnalyzer::new();
    let tags = analyzer.suggest_tags(&item, &categories);
    let matches = if args.explain {
        analyzer.explain(&item, &categories)
    } else {
        vec![]
    };

    if args.json {
        let mut output = serde_json::json!({ "tags": tags });
        if args.explain {
            output["matches"] = serde_json::to_value(&matches)?;
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No tags matched.");
        return Ok(());
    }

    println!("Suggested Tags");
    println!("==============");
    if args.explain {
        for m in &matches {
            println!("  - {} [{}] via {}", m.tag, m.category_id, m.strategy);
        }
    } else {
        for tag in &tags {
            println!("  - {}", tag);
        }
    }

    Ok(())
}

pub(crate) async fn load_categories(path: &Path) -> Result<Vec<TagCategory>> {
    let repo = FilesystemTaxonomyRepo::new(path)
        .context("Failed to initialize taxonomy repository")?;
    repo.load().await.context("Failed to load taxonomy")
}

fn get_input_item(args: &SuggestArgs) -> Result<ContentItem> {
    if let Some(ref path) = args.file {
        let raw = if path.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            text
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?
        };

        return serde_json::from_str(&raw).context("Content file must be a JSON object");
    }

    Ok(ContentItem::new(
        args.title.clone().unwrap_or_default(),
        args.description.clone().unwrap_or_default(),
    ))
}
