//! Terminal UI for the picker
//!
//! - `render` - frame rendering to styled plain-text lines
//! - `input` - key mapping and the raw-mode interactive loop
//! - `theme` - colors and icon sets
//! - `terminal` - capability detection
//! - `json` - NDJSON output for `--json`

pub mod input;
pub mod json;
pub mod render;
pub mod terminal;
pub mod theme;
