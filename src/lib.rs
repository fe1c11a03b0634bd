//! tzpick - interactive timezone picker
//!
//! The picker state machine in `picker` has no I/O at all. `ui` renders it
//! and drives it from a raw-mode terminal; `config` persists the result.
//! The binary only adds argument parsing and command dispatch.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod picker;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{TzpickError, TzpickResult};
pub use picker::{apply_command, begin_session, end_session, Command, SessionState};
