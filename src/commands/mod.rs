//! Command handlers for the tzpick binary

pub mod list;
pub mod show;
pub mod wizard;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tzpick::config::{default_config_path, Config, ConfigWarning};

/// `--config` if given, otherwise the per-user default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(default_config_path()?),
    }
}

/// Load the config file, reporting unknown keys on stderr
pub fn load_config(path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(path)?;
    report_warnings(&warnings);
    Ok(config)
}

fn report_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        tracing::warn!(key = %warning.key, "unknown config key");
        eprintln!("Warning: {}", warning);
    }
}
