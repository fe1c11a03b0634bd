//! Error types for tzpick
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tzpick operations
pub type TzpickResult<T> = Result<T, TzpickError>;

/// Main error type for tzpick operations
#[derive(Error, Debug)]
pub enum TzpickError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config could not be serialized for saving
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Area name not present in the catalog
    #[error("invalid area name '{area}'")]
    UnknownArea { area: String },

    /// No platform config directory and no `--config` given
    #[error("could not determine config directory - pass --config <path>")]
    NoConfigDir,

    /// Interactive picker requested without a terminal
    #[error("the picker needs an interactive terminal")]
    NotATerminal,
}
