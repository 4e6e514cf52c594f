use std::path::{Path, PathBuf};

use super::dirs;
use super::types::{ConfigError, FormSettings};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that replaces the configured endpoint.
pub const ENDPOINT_ENV: &str = "DEMOFORM_ENDPOINT";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
///
/// `DEMOFORM_ENDPOINT` wins over the file when set.
pub fn load_or_default() -> Result<FormSettings, ConfigError> {
    let path = config_path()?;
    let settings = load_settings_from(&path)?;
    Ok(apply_env_override(settings, std::env::var(ENDPOINT_ENV).ok()))
}

pub fn load_settings_from(path: &Path) -> Result<FormSettings, ConfigError> {
    if !path.exists() {
        return Ok(FormSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<FormSettings>(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(FormSettings::normalized)
}

/// Persist settings, creating parent directories as needed.
pub fn save_to_path(settings: &FormSettings, path: &Path) -> Result<(), ConfigError> {
    dirs::create_parent(path)?;
    let text = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_override(settings: FormSettings, endpoint: Option<String>) -> FormSettings {
    match endpoint {
        Some(endpoint) => FormSettings { endpoint }.normalized(),
        None => settings,
    }
}
