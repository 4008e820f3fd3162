//! Configuration module for animora-seed.
//!
//! Loads configuration from environment variables once at startup. The
//! resulting [`Config`] is passed explicitly to whatever needs it.

use std::env;
use std::path::PathBuf;

use crate::error::{Result, SeedError};

const DEFAULT_DATABASE: &str = "animora";
const DEFAULT_COLLECTION: &str = "diseases";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,

    /// CA bundle used to verify the server certificate.
    /// Falls back to the platform roots when unset.
    pub tls_ca_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment (after `.env`).
    ///
    /// # Errors
    /// Returns [`SeedError::Configuration`] if `MONGO_URI` is missing or empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mongodb_uri = non_empty("MONGO_URI")
            .ok_or_else(|| SeedError::Configuration("MONGO_URI must be set".to_string()))?;

        Ok(Self {
            mongodb_uri,
            mongodb_database: non_empty("MONGO_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            mongodb_collection: non_empty("MONGO_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            tls_ca_file: non_empty("MONGO_TLS_CA_FILE").map(PathBuf::from),
        })
    }

    /// `database.collection`, as shown in status messages.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.mongodb_database, self.mongodb_collection)
    }
}
