//! Taxonomy command - list, validate, and bootstrap taxonomies

use anyhow::{Context, Result};
use link_curator_adapters::{links::FilesystemLinkRepo, taxonomy::FilesystemTaxonomyRepo};
use link_curator_domain::{TagCategory, Taxonomy, TaxonomyRepo, usecases::BootstrapTaxonomy};
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::{TaxonomyArgs, TaxonomyCommands};
use crate::commands::suggest::load_categories;
use crate::config::AppConfig;

pub async fn execute(args: TaxonomyArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    match args.command {
        TaxonomyCommands::List { taxonomy, json } => {
            let path = taxonomy.unwrap_or(config.general.taxonomy_path);
            list_taxonomy(path, json).await
        }
        TaxonomyCommands::Validate { taxonomy } => {
            let path = taxonomy.unwrap_or(config.general.taxonomy_path);
            validate_taxonomy(path).await
        }
        TaxonomyCommands::Suggest {
            links,
            output,
            json,
        } => {
            let path = links.unwrap_or(config.general.links_path);
            suggest_taxonomy(path, output, json).await
        }
    }
}

async fn list_taxonomy(path: PathBuf, json: bool) -> Result<()> {
    let taxonomy = Taxonomy::new(load_categories(&path).await?);

    if json {
        let output = serde_json::json!({
            "hash": taxonomy.hash,
            "tag_count": taxonomy.tag_count(),
            "categories": taxonomy.categories,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Taxonomy ({} categories, {} tags)",
            taxonomy.categories.len(),
            taxonomy.tag_count()
        );
        println!("========================");
        println!();
        print_categories(&taxonomy.categories);
    }

    Ok(())
}

async fn validate_taxonomy(path: PathBuf) -> Result<()> {
    println!("Validating taxonomy: {}", path.display());

    let repo = FilesystemTaxonomyRepo::new(&path)
        .context("Failed to initialize taxonomy repository")?;

    match repo.validate().await {
        Ok(()) => {
            println!("✓ Validation passed");
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn suggest_taxonomy(links_path: PathBuf, output: Option<PathBuf>, json: bool) -> Result<()> {
    let links = Arc::new(
        FilesystemLinkRepo::new(&links_path).context("Failed to open links file")?,
    );

    let categories = BootstrapTaxonomy::new(links)
        .run()
        .await
        .context("Failed to suggest taxonomy")?;

    if let Some(ref output) = output {
        FilesystemTaxonomyRepo::new(output)
            .context("Failed to initialize taxonomy repository")?
            .save(&categories)
            .await
            .context("Failed to save taxonomy")?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        println!("Suggested Taxonomy");
        println!("==================");
        println!();
        print_categories(&categories);
        if let Some(output) = output {
            println!("Saved to {}", output.display());
        }
    }

    Ok(())
}

fn print_categories(categories: &[TagCategory]) {
    for category in categories {
        println!("{} ({}) {}", category.name, category.id, category.color);
        if category.tags.is_empty() {
            println!("  (no tags)");
        } else {
            println!("  {}", category.tags.join(", "));
        }
        println!();
    }
}
