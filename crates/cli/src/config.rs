//! Optional `config.toml` and store directory resolution.

use crate::error::CliError;
use directories::ProjectDirs;
use hue_forge_core::DEFAULT_COUNT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the store directory.
pub const STORE_DIR_ENV: &str = "HUE_FORGE_STORE_DIR";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Palette size when `generate` gets no `-n`.
    pub default_count: usize,
    /// Strategy when `generate` gets no strategy argument.
    pub default_strategy: String,
    pub store_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            default_strategy: "harmonious".to_string(),
            store_dir: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "hue-forge")
}

impl Config {
    /// Reads the config file.
    ///
    /// An explicit `path` must exist. Without one, `config.toml` in the
    /// platform config directory is read if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::read(path),
            None => match project_dirs().map(|d| d.config_dir().join("config.toml")) {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, CliError> {
        tracing::debug!(path = %path.display(), "reading config file");
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("could not read config file {}: {e}", path.display()))
        })?;
        Self::parse(&text)
            .map_err(|e| CliError::Input(format!("invalid config file {}: {e}", path.display())))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Picks the store directory: `--store-dir`, then the environment
    /// variable, then the config file, then the platform data directory.
    pub fn store_dir(
        &self,
        flag: Option<PathBuf>,
        env: Option<PathBuf>,
    ) -> Result<PathBuf, CliError> {
        flag.or(env)
            .or_else(|| self.store_dir.clone())
            .or_else(|| project_dirs().map(|d| d.data_local_dir().to_path_buf()))
            .ok_or_else(|| {
                CliError::Io("could not determine a data directory; pass --store-dir".to_string())
            })
    }
}
