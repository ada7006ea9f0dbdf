//! Wizard command - batch tag suggestions with progress

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use link_curator_adapters::links::FilesystemLinkRepo;
use link_curator_domain::{
    ContentAnalyzer, SystemClock, Taxonomy, WizardItem, WizardOutcome, WizardReport,
    usecases::{NoProgress, ProgressSink, TagWizard, WizardConfig},
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::WizardArgs;
use crate::commands::suggest::load_categories;
use crate::config::AppConfig;

pub async fn execute(args: WizardArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let taxonomy_path = args
        .taxonomy
        .clone()
        .unwrap_or_else(|| config.general.taxonomy_path.clone());
    let links_path = args
        .links
        .clone()
        .unwrap_or_else(|| config.general.links_path.clone());

    let wizard_config = wizard_config_from(&args, &config);
    let taxonomy = Taxonomy::new(load_categories(&taxonomy_path).await?);
    let links = Arc::new(
        FilesystemLinkRepo::new(&links_path).context("Failed to open links file")?,
    );

    tracing::info!(
        taxonomy = %taxonomy_path.display(),
        links = %links_path.display(),
        dry_run = wizard_config.dry_run,
        "Starting tag wizard"
    );

    let wizard = TagWizard::new(
        ContentAnalyzer::new(),
        links,
        Arc::new(SystemClock),
        wizard_config,
    );

    let report = if args.json {
        wizard.run(&taxonomy, &NoProgress).await?
    } else {
        wizard.run(&taxonomy, &BarProgress::new()).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn wizard_config_from(args: &WizardArgs, config: &AppConfig) -> WizardConfig {
    let dry_run = if args.apply {
        false
    } else {
        args.dry_run || config.wizard.dry_run
    };

    WizardConfig {
        dry_run,
        overwrite_existing: args.overwrite || config.wizard.overwrite_existing,
        skip_tagged: args.skip_tagged || config.wizard.skip_tagged,
    }
}

/// Progress bar on stderr
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#> -"));
        }
        Self { bar }
    }
}

impl ProgressSink for BarProgress {
    fn on_start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_item(&self, _index: usize, item: &WizardItem) {
        self.bar.set_message(item.title.clone());
        self.bar.inc(1);
    }

    fn on_finish(&self, _report: &WizardReport) {
        self.bar.finish_and_clear();
    }
}

fn print_report(report: &WizardReport) {
    println!("Tag Wizard Report");
    println!("=================");
    println!();
    println!("Collection: {}", report.collection);
    println!("Taxonomy:   {}", &report.taxonomy_hash[..12.min(report.taxonomy_hash.len())]);
    if report.dry_run {
        println!("Mode:       dry run (nothing written)");
    }
    println!();

    for item in &report.items {
        let symbol = match item.outcome {
            WizardOutcome::Updated => "+",
            WizardOutcome::Unchanged => "=",
            WizardOutcome::Skipped => "-",
        };
        println!("{} {} [{}]", symbol, item.title, item.tags.join(", "));
    }

    println!();
    println!(
        "{} links: {} updated, {} unchanged, {} skipped",
        report.total, report.updated, report.unchanged, report.skipped
    );
}
