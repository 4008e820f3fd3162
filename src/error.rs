//! Error types shared by every subcommand.

use std::path::PathBuf;

/// Fatal errors. Nothing here is retried; `main` reports and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("failed to read {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store connectivity error: {0}")]
    StoreConnectivity(#[from] mongodb::error::Error),
}

pub type Result<T, E = SeedError> = std::result::Result<T, E>;
