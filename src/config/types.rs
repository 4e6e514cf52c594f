use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::submission::api::DEFAULT_ENDPOINT;

/// Settings persisted in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// URL the form posts to. Empty means not configured.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl FormSettings {
    pub(super) fn normalized(mut self) -> Self {
        self.endpoint = self.endpoint.trim().to_string();
        self
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No base directory for application files could be resolved.
    #[error("No suitable config directory available")]
    NoConfigDir,
    /// Failed to create the app, logs or config parent directory.
    #[error("Unable to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`FormSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
