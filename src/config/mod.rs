//! Configuration module for tzpick
//!
//! Resolution order:
//! 1. `--config <path>` (highest priority)
//! 2. Environment variables (TZPICK_*)
//! 3. User config (`<config_dir>/tzpick/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, default_config_path, ConfigWarning};
pub use types::{Config, UiConfig};
