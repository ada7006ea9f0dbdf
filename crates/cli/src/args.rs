//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// link-curator: suggest tags and starter taxonomies for saved links
#[derive(Parser, Debug)]
#[command(name = "link-curator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest tags for a single piece of content
    Suggest(SuggestArgs),

    /// Inspect, validate, or bootstrap a taxonomy
    Taxonomy(TaxonomyArgs),

    /// Suggest and assign tags for every link in a collection
    Wizard(WizardArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Content title
    #[arg(long, conflicts_with = "file")]
    pub title: Option<String>,

    /// Content description
    #[arg(long, conflicts_with = "file")]
    pub description: Option<String>,

    /// JSON file with {"title", "description"} (use - for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Override taxonomy file
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,

    /// Show which strategy matched each tag
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TaxonomyArgs {
    #[command(subcommand)]
    pub command: TaxonomyCommands,
}

#[derive(Subcommand, Debug)]
pub enum TaxonomyCommands {
    /// List all categories and tags
    List {
        /// Override taxonomy file
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a taxonomy file
    Validate {
        /// Override taxonomy file
        #[arg(long)]
        taxonomy: Option<PathBuf>,
    },

    /// Derive a starter taxonomy from a collection's links
    Suggest {
        /// Override links file
        #[arg(long)]
        links: Option<PathBuf>,

        /// Write the suggested taxonomy to this file (.json or .toml)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct WizardArgs {
    /// Override links file
    #[arg(long)]
    pub links: Option<PathBuf>,

    /// Override taxonomy file
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,

    /// Compute suggestions without writing them back
    #[arg(long)]
    pub dry_run: bool,

    /// Write suggestions back even if the config says dry_run
    #[arg(long, conflicts_with = "dry_run")]
    pub apply: bool,

    /// Replace existing tags instead of merging
    #[arg(long)]
    pub overwrite: bool,

    /// Leave links that already have tags untouched
    #[arg(long)]
    pub skip_tagged: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
