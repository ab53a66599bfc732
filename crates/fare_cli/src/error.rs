use std::path::PathBuf;

use fare_adapters::AdapterError;
use fare_core::config::ConfigError;
use fare_core::FareError;
use fare_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid trip plan '{}': {source}", path.display())]
    TripPlan {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid session file '{}': {source}", path.display())]
    Session {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Fare(#[from] FareError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
