//! Utility functions used throughout the application

use std::path::PathBuf;

use anyhow::Result;

const APP_DIR: &str = "tiledbrowse";
const CONFIG_FILE: &str = "config.yaml";

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("tiledbrowse-debug.log");
    path
}

/// Locate the config file
///
/// An explicit path must exist. Otherwise the platform config directory and
/// then ./config.yaml are tried; `None` means run with the defaults.
pub fn get_config_path(cli_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path));
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(APP_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from(CONFIG_FILE);
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
