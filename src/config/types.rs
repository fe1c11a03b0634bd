//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TzpickResult;

use super::loader::{self, ConfigWarning};

/// Display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// `false` switches every icon to its ASCII fallback
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { unicode: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Ordered selection, first entry shown first
    #[serde(default)]
    pub timezones: Vec<String>,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> TzpickResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TzpickResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (TZPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Write the configuration, replacing `path` atomically
    pub fn save(&self, path: &Path) -> TzpickResult<()> {
        loader::save(path, self)
    }

    /// Selection to seed the picker with. Falls back to `Local` when nothing
    /// has been saved yet.
    pub fn initial_selection(&self) -> Vec<String> {
        if self.timezones.is_empty() {
            vec![crate::picker::LOCAL.to_string()]
        } else {
            self.timezones.clone()
        }
    }

    /// Drop repeated timezones, keeping the first occurrence
    pub(crate) fn dedup_timezones(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.timezones.retain(|tz| seen.insert(tz.clone()));
    }
}
