//! Log subscriber setup
//!
//! Events go to stderr. The filter sits behind a reload handle so the
//! interactive picker can silence logging while it owns the terminal.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Level for a `-v` count: 0 = error, 1 = warn, 2 = info, 3 = debug, 4+ = trace
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Handle to the installed subscriber's filter
#[derive(Clone)]
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    directives: String,
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
pub fn init(verbosity: u8) -> LogHandle {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level_for(verbosity).to_string());

    let filter = EnvFilter::try_new(&directives)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).to_string()));
    let (filter, handle) = reload::Layer::new(filter);

    // A subscriber may already be installed (tests); keep going with ours unused.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    LogHandle { handle, directives }
}

impl LogHandle {
    /// Turn logging off until the returned guard is dropped
    pub fn suspend(&self) -> SuspendGuard<'_> {
        let _ = self.handle.reload(EnvFilter::new("off"));
        SuspendGuard { owner: self }
    }

    fn restore(&self) {
        let filter =
            EnvFilter::try_new(&self.directives).unwrap_or_else(|_| EnvFilter::new("error"));
        let _ = self.handle.reload(filter);
    }
}

/// Restores the previous filter on drop
pub struct SuspendGuard<'a> {
    owner: &'a LogHandle,
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.owner.restore();
    }
}
