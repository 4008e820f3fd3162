//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::database::{Database, DiseaseRepository, DiseaseStore};
use crate::error::Result;
use crate::loader::UpsertLoader;

#[derive(Debug, Parser)]
#[command(name = "animora-seed")]
#[command(about = "Seed and inspect the Animora disease collection in MongoDB")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Check the connection and list the database's collections
    Ping,
    /// Insert one sample disease if the collection is empty
    SeedSample,
    /// Upsert every named disease from a JSON file
    Load {
        /// JSON file with a top-level `diseases` array
        #[arg(default_value = "diseases_100plus.json")]
        file: PathBuf,
        /// Skip the load when the collection already has documents
        #[arg(long)]
        only_if_empty: bool,
    },
    /// List the names of stored diseases
    List,
}

/// Run one command against an open database.
pub async fn run(command: Commands, config: &Config, db: &Database) -> Result<()> {
    let mut repo = DiseaseRepository::new(db, &config.mongodb_collection);

    match command {
        Commands::Ping => {
            let names = db.collection_names().await?;
            println!("Connection successful!");
            println!("Collections in '{}' database: {:?}", db.name(), names);
        }
        Commands::SeedSample => {
            if UpsertLoader::new(&mut repo).seed_sample().await? {
                println!("Sample document inserted into {}", config.namespace());
            } else {
                println!("{} already has data", config.namespace());
            }
        }
        Commands::Load { file, only_if_empty } => {
            let report = UpsertLoader::new(&mut repo)
                .load_file(&file, only_if_empty)
                .await?;

            match report.already_populated {
                Some(existing) => println!(
                    "{} already has {} documents, nothing loaded",
                    config.namespace(),
                    existing
                ),
                None => println!(
                    "Upserted {} disease records into MongoDB ({})",
                    report.processed,
                    config.namespace()
                ),
            }
        }
        Commands::List => {
            let names = repo.names().await?;
            let total = repo.count_documents(mongodb::bson::doc! {}).await?;
            info!("Found {} named records among {} documents", names.len(), total);

            for name in &names {
                println!("{}", name);
            }
            println!("{} documents in {}", total, config.namespace());
        }
    }

    Ok(())
}
