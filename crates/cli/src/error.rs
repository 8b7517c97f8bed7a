//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: store error (corrupt stored data, bad key)
//! - 11: I/O error (store directory, config file)
//! - 12: input error (bad color, unknown strategy or mood, unknown id)
//! - 13: serialization error

use hue_forge_core::PaletteError;
use hue_forge_store::StoreError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A palette store error other than plain I/O.
    Store(StoreError),
    /// An I/O error (store directory, config file).
    Io(String),
    /// A user input error (bad color, unknown strategy, unknown palette id).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Store(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Store(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io { .. } => CliError::Io(e.to_string()),
            StoreError::Serialization(_) => CliError::Serialization(e.to_string()),
            other => CliError::Store(other),
        }
    }
}

impl From<PaletteError> for CliError {
    fn from(e: PaletteError) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
