//! MongoDB database wrapper.

use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, SeedError};

/// Owned MongoDB client plus the configured database.
///
/// Acquired once in `main` and released with [`Database::shutdown`].
#[derive(Debug)]
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB using the given configuration.
    ///
    /// # Errors
    /// Returns [`SeedError::Configuration`] for an invalid connection string or
    /// a missing TLS CA file, and [`SeedError::StoreConnectivity`] if the
    /// connection or ping fails.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = Self::client_options(config).await?;

        let client = Client::with_options(options)?;

        // Ping the database to verify connection
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Successfully connected to MongoDB");

        let db = client.database(&config.mongodb_database);

        Ok(Self { client, db })
    }

    /// Parse the connection string and apply the TLS settings.
    async fn client_options(config: &Config) -> Result<ClientOptions> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .map_err(|e| {
                if matches!(*e.kind, ErrorKind::InvalidArgument { .. }) {
                    SeedError::Configuration(format!("MONGO_URI is invalid: {}", e))
                } else {
                    SeedError::StoreConnectivity(e)
                }
            })?;

        if let Some(ca_file) = &config.tls_ca_file {
            if !ca_file.is_file() {
                return Err(SeedError::Configuration(format!(
                    "MONGO_TLS_CA_FILE {} is not a readable file",
                    ca_file.display()
                )));
            }
            let tls = TlsOptions::builder()
                .ca_file_path(Some(ca_file.clone()))
                .build();
            options.tls = Some(Tls::Enabled(tls));
            debug!("Using CA bundle {}", ca_file.display());
        }

        Ok(options)
    }

    /// Name of the configured database.
    pub fn name(&self) -> &str {
        self.db.name()
    }

    /// Get a typed collection from the database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// List every collection in the configured database, sorted.
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        let mut names = self.db.list_collection_names().await?;
        names.sort();
        Ok(names)
    }

    /// Close the client, waiting for in-flight operations to finish.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        debug!("MongoDB client shut down");
    }
}
