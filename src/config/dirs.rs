//! On-disk layout: `<config base>/.demoform/{config.toml, logs/}`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::types::ConfigError;

/// Folder created under the OS config directory.
pub const APP_DIR_NAME: &str = ".demoform";
/// Replaces the OS config directory, for tests and portable installs.
pub const CONFIG_HOME_ENV: &str = "DEMOFORM_CONFIG_HOME";
const LOGS_DIR_NAME: &str = "logs";

/// The `.demoform` folder, created on first use.
pub fn app_root_dir() -> Result<PathBuf, ConfigError> {
    let base = std::env::var_os(CONFIG_HOME_ENV)
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
        .ok_or(ConfigError::NoConfigDir)?;
    create_dir(base.join(APP_DIR_NAME))
}

/// Where log files are written, created on first use.
pub fn logs_dir() -> Result<PathBuf, ConfigError> {
    create_dir(app_root_dir()?.join(LOGS_DIR_NAME))
}

pub(super) fn create_parent(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(parent) => create_dir(parent.to_path_buf()).map(|_| ()),
        None => Ok(()),
    }
}

fn create_dir(path: PathBuf) -> Result<PathBuf, ConfigError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(ConfigError::CreateDir { path, source }),
    }
}
