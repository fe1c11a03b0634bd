//! Configuration loading and persistence

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{TzpickError, TzpickResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// `<config_dir>/tzpick/config.toml`
pub fn default_config_path() -> TzpickResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("tzpick").join("config.toml"))
        .ok_or(TzpickError::NoConfigDir)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
/// A missing file is not an error and yields defaults.
pub fn load_with_warnings(path: &Path) -> TzpickResult<(Config, Vec<ConfigWarning>)> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok((Config::default(), Vec::new()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TzpickError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.dedup_timezones();

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    debug!(
        path = %path.display(),
        timezones = config.timezones.len(),
        warnings = warnings.len(),
        "loaded config"
    );
    Ok((config, warnings))
}

/// Apply environment overrides. `lookup` resolves a variable name.
///
/// - `TZPICK_TIMEZONES`: comma-separated selection, replaces the saved one
/// - `TZPICK_ASCII`: `1`/`true` forces ASCII icons
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(list) = lookup("TZPICK_TIMEZONES") {
        let parsed: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.timezones = parsed;
            config.dedup_timezones();
        }
    }

    if let Some(val) = lookup("TZPICK_ASCII") {
        let val = val.trim().to_lowercase();
        if val == "1" || val == "true" {
            config.ui.unicode = false;
        }
    }

    config
}

/// Serialize `config` and atomically replace `path`. Parent directories are
/// created as needed.
pub fn save(path: &Path, config: &Config) -> TzpickResult<()> {
    let content = toml::to_string_pretty(config)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| {
        warn!(path = %path.display(), "failed to persist config");
        TzpickError::Io(e.error)
    })?;

    debug!(path = %path.display(), timezones = config.timezones.len(), "saved config");
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["timezones", "ui", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 && dist < unknown.len() => {
            Some(candidate.to_string())
        }
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
