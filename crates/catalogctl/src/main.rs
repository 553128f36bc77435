//! catalogctl - build and query the skill catalog.
//!
//! Scans a skills directory, writes the catalog artifacts, and answers
//! lookups against the in-memory catalog.

mod render;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use catalog_core::catalog::{build, generate};
use catalog_core::config::ConfigError;
use catalog_core::{CatalogError, Config};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown skill: {0}")]
    UnknownSkill(String),
}

/// Skill catalog builder.
#[derive(Parser)]
#[command(name = "catalogctl")]
#[command(about = "Build and query the skill catalog")]
#[command(version)]
struct Cli {
    /// Catalog root (default: current directory)
    #[arg(long, global = true, env = "CATALOG_ROOT")]
    root: Option<PathBuf>,

    /// Config file path (overrides .catalog/config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skills directory (overrides config)
    #[arg(long, global = true)]
    skills_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate catalog, bundle, alias and markdown files
    Build {
        /// Skip writing the markdown catalog
        #[arg(long)]
        no_markdown: bool,
    },

    /// List cataloged skills
    List {
        /// Only show skills in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Resolve a skill id or alias to its canonical id
    Resolve {
        /// Skill id, display name, or alias
        query: String,
    },
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };

    let mut config = Config::load(&root, cli.config.as_deref())?;
    if let Some(dir) = &cli.skills_dir {
        config.skills_dir = if dir.is_relative() {
            root.join(dir)
        } else {
            dir.clone()
        };
    }

    debug!(?config, "resolved configuration");
    Ok(config)
}

fn run_build(mut config: Config, no_markdown: bool) -> Result<(), CliError> {
    if no_markdown {
        config.write_markdown = false;
    }
    let result = generate(&config, Utc::now())?;
    println!("Generated catalog for {} skills.", result.catalog.total);
    Ok(())
}

fn run_list(config: &Config, category: Option<&str>) -> Result<(), CliError> {
    let result = build(config, Utc::now())?;
    let skills: Vec<_> = result
        .catalog
        .skills
        .iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .collect();
    render::print_skill_list(&skills);
    Ok(())
}

fn run_resolve(config: &Config, query: &str) -> Result<(), CliError> {
    let result = build(config, Utc::now())?;
    match result.resolve(query) {
        Some(id) => {
            println!("{id}");
            Ok(())
        }
        None => Err(CliError::UnknownSkill(query.to_string())),
    }
}

fn main() {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = load_config(&cli).and_then(|config| match &cli.command {
        Command::Build { no_markdown } => run_build(config, *no_markdown),
        Command::List { category } => run_list(&config, category.as_deref()),
        Command::Resolve { query } => run_resolve(&config, query),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
