//! Form settings stored as TOML in the application directory, plus the
//! directory layout shared with logging.
//!
//! ```toml
//! endpoint = "https://formspree.io/f/meelekpb"
//! ```

mod dirs;
mod io;
mod types;

pub use dirs::{APP_DIR_NAME, CONFIG_HOME_ENV, app_root_dir, logs_dir};
pub use io::{
    CONFIG_FILE_NAME, ENDPOINT_ENV, config_path, load_or_default, load_settings_from,
    save_to_path,
};
pub use types::{ConfigError, FormSettings};
