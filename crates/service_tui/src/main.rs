//! Slayer Roster entry point.

use anyhow::Result;
use clap::Parser;
use roster_core::ordering::RosterOrder;
use service_tui::config::DEFAULT_CONFIG_FILE;
use service_tui::prelude::*;
use service_tui::{logging, runtime};
use std::path::PathBuf;
use tracing::info;

/// Browse the Demon Slayer character catalog in the terminal
#[derive(Parser)]
#[command(name = "slayer-roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Number of characters to list
    #[arg(short, long)]
    limit: Option<usize>,

    /// Roster order (alphabetical, catalog)
    #[arg(short, long)]
    order: Option<RosterOrder>,
}

impl Cli {
    fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_or_default(&PathBuf::from(DEFAULT_CONFIG_FILE))?,
        };
        let mut config = config.with_env_override()?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(limit) = self.limit {
            config.list_limit = limit;
        }
        if let Some(order) = self.order {
            config.roster_order = order;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init(&config)?;
    info!(
        base_url = %config.base_url,
        limit = config.list_limit,
        order = config.roster_order.as_str(),
        "Slayer Roster starting"
    );

    runtime::run(&config).await?;
    Ok(())
}
