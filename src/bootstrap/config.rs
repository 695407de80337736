//! # Configuration Loader
//!
//! Reads the TOML file and maps it to the `AppConfig` DTO. Accepts whatever
//! is in the file: no validation and no defaults here. Defaults belong to
//! the wiring layer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cl_core::AppConfig;
use tracing::debug;

pub const APP_DIR_NAME: &str = "colocate";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Where the config file lives when none is given on the command line.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the explicit config file, or the default one if it exists.
///
/// An explicit path that cannot be read is an error. A missing default file
/// is not: the process runs with an empty configuration.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        Some(path) => {
            debug!(path = %path.display(), "no config file; using empty configuration");
            Ok(AppConfig::default())
        }
        None => Ok(AppConfig::default()),
    }
}
