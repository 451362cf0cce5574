mod catalog;
mod dashboard;
mod render;
mod search;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use lapstore_client::StorefrontClient;
use lapstore_core::{AppConfig, MemorySession};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogArgs;
use crate::dashboard::DashboardArgs;
use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "lapstore")]
#[command(about = "Laptop storefront catalog client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the catalog with brand, filters, sort and paging
    Catalog(CatalogArgs),
    /// Full-text search over the catalog
    Search(SearchArgs),
    /// Admin sales dashboard (requires an admin login)
    Dashboard(DashboardArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = lapstore_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, backend = %config.backend_url, "config loaded");

    match cli.command {
        Commands::Catalog(args) => catalog::run_catalog(&config, &args).await,
        Commands::Search(args) => search::run_search(&config, &args).await,
        Commands::Dashboard(args) => dashboard::run_dashboard(&config, &args).await,
    }
}

/// Builds the API client with a fresh in-memory session.
pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<StorefrontClient> {
    StorefrontClient::new(config, Arc::new(MemorySession::default()))
        .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))
}
