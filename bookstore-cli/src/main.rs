use anyhow::{Context, Result};
use bookstore_cli::{commands, Command, Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Browse and sell books from a catalog fixture
#[derive(Debug, Parser)]
#[command(name = "bookstore", version)]
struct Cli {
    /// Extra configuration file, layered over config/default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog fixture, overrides catalog.path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level, overrides log.level (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print books as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let level = cli.log_level.unwrap_or(config.log.level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bookstore_cli={level},bookstore_catalog={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = cli.catalog.unwrap_or(config.catalog.path);
    tracing::info!("Loading catalog from {}", path.display());
    let mut catalog = commands::load_catalog(&path)?;

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
    let output = commands::run(cli.command, &mut catalog, format)?;
    println!("{output}");

    Ok(())
}
