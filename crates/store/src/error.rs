//! Error types for palette persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by storage backends and the palette gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a backing file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value was not the JSON the gateway expects.
    #[error("corrupt value under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized, or an update produced an invalid entry.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A key contained characters a backend cannot store.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}
