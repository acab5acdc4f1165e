use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_content::{CONTENT_PATH_ENV, ContentStore};
use tracing::info;

mod export;

/// Validate, inspect and export the portfolio page.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a content document
    Check {
        /// Content document (YAML or JSON); the embedded document when omitted
        #[arg(long, env = CONTENT_PATH_ENV)]
        content: Option<PathBuf>,
    },
    /// Print the resolved content document, defaults included
    Dump {
        #[arg(long, env = CONTENT_PATH_ENV)]
        content: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Pre-render the page into a built `index.html`
    Export {
        /// Directory produced by `trunk build`
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    match Args::parse().command {
        Command::Check { content } => check(content),
        Command::Dump { content, format } => dump(content, format),
        Command::Export { dist } => export::export(&dist).await,
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load(content: Option<PathBuf>) -> Result<ContentStore> {
    ContentStore::resolve(content.as_deref()).context("failed to load portfolio content")
}

fn check(content: Option<PathBuf>) -> Result<()> {
    let store = load(content)?;
    let tech_tags: usize = store.technologies().groups().iter().map(|group| group.tags.len()).sum();
    info!(source = %store.source(), "Content document is valid");
    println!("{} ({})", store.profile().site_title, store.source());
    println!("  contacts:     {}", store.contacts().len());
    println!("  experience:   {}", store.experience().len());
    println!("  projects:     {}", store.projects().len());
    println!("  education:    {}", store.education().len());
    println!("  technologies: {tech_tags}");
    Ok(())
}

fn dump(content: Option<PathBuf>, format: Format) -> Result<()> {
    let store = load(content)?;
    let text = match format {
        Format::Yaml => serde_yaml::to_string(store.portfolio())?,
        Format::Json => serde_json::to_string_pretty(store.portfolio())?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
