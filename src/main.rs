//! animora-seed - MongoDB seeding tool for the Animora disease collection.
//!
//! ## Architecture
//!
//! - `cli` - Subcommands and dispatch
//! - `config` - Environment configuration
//! - `database` - MongoDB client, disease repository, store trait
//! - `loader` - Idempotent upsert of disease records keyed by name
//! - `error` - Error taxonomy

mod cli;
mod config;
mod database;
mod error;
mod loader;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use database::Database;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("animora_seed=info,mongodb=warn"));

    // Logs go to stderr, status messages to stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!("Configuration loaded, target {}", config.namespace());

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config).await?;

    let result = cli::run(cli.command, &config, &db).await;
    db.shutdown().await;

    Ok(result?)
}
