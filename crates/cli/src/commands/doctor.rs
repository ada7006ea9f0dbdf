//! Doctor command - validate configuration and show status

use anyhow::Result;
use link_curator_adapters::{links::FilesystemLinkRepo, taxonomy::FilesystemTaxonomyRepo};
use link_curator_domain::{LinkRepo, Taxonomy, TaxonomyRepo};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    taxonomy: CheckResult,
    links: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
    details: Option<serde_json::Value>,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        taxonomy: CheckResult::error("Not checked"),
        links: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    // Check config
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.taxonomy = check_taxonomy(&config.general.taxonomy_path).await;
        report.links = check_links(&config.general.links_path).await;
    }

    let checks = [&report.config, &report.taxonomy, &report.links];

    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

async fn check_taxonomy(path: &Path) -> CheckResult {
    if !path.exists() {
        return CheckResult::error(format!("Taxonomy file does not exist: {}", path.display()));
    }

    let repo = match FilesystemTaxonomyRepo::new(path) {
        Ok(r) => r,
        Err(e) => return CheckResult::error(format!("Failed to open taxonomy: {}", e)),
    };

    match repo.load().await {
        Ok(categories) => {
            let taxonomy = Taxonomy::new(categories);
            let result = if taxonomy.tag_count() == 0 {
                CheckResult::warn("Taxonomy has categories but no tags")
            } else {
                CheckResult::ok(format!(
                    "{} categories, {} tags",
                    taxonomy.categories.len(),
                    taxonomy.tag_count()
                ))
            };
            result.with_details(serde_json::json!({
                "hash": taxonomy.hash,
                "categories": taxonomy.categories.iter().map(|c| &c.id).collect::<Vec<_>>(),
            }))
        }
        Err(e) => CheckResult::error(format!("Validation failed: {}", e)),
    }
}

async fn check_links(path: &Path) -> CheckResult {
    let repo = match FilesystemLinkRepo::new(path) {
        Ok(r) => r,
        Err(e) => return CheckResult::error(format!("Failed to open links file: {}", e)),
    };

    match repo.list().await {
        Ok(links) if links.is_empty() => CheckResult::warn("Links file contains no links"),
        Ok(links) => {
            let untagged = links.iter().filter(|l| l.tags.is_empty()).count();
            CheckResult::ok(format!("{} links ({} untagged)", links.len(), untagged))
        }
        Err(e) => CheckResult::error(format!("Failed to read links: {}", e)),
    }
}

fn print_report(report: &DoctorReport) {
    println!("link-curator Doctor Report");
    println!("==========================");
    println!();

    print_check("Config", &report.config);
    print_check("Taxonomy", &report.taxonomy);
    print_check("Links", &report.links);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall == "ok" {
        println!();
        println!("Ready! Try: link-curator wizard --dry-run");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
