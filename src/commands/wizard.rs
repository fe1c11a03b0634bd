//! Wizard command handler
//!
//! Seeds the picker from the saved config, runs it on the terminal, and
//! writes the committed selection back.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use tzpick::catalog::ALL_TIMEZONES;
use tzpick::logging::LogHandle;
use tzpick::picker::SessionState;
use tzpick::TzpickError;

use tzpick::ui::input::run_interactive;
use tzpick::ui::terminal::detect_capabilities;

pub fn cmd_wizard(config_path: &Path, json: bool, ascii: bool, log: &LogHandle) -> Result<()> {
    let mut saved = super::load_config(config_path)?;
    let effective = saved.clone().with_env_overrides();

    let caps = detect_capabilities();
    if !caps.is_tty {
        return Err(TzpickError::NotATerminal.into());
    }
    let unicode = effective.ui.unicode && caps.supports_unicode && !ascii;

    let state = SessionState::begin(ALL_TIMEZONES, &effective.initial_selection());
    let outcome = {
        let _quiet = log.suspend();
        run_interactive(state, unicode)?
    };

    match outcome {
        Some(selection) => {
            let count = selection.len();
            saved.timezones = selection;
            saved.save(config_path)?;
            info!(count, path = %config_path.display(), "selection saved");

            if json {
                tzpick::ui::json::emit(serde_json::json!({
                    "event": "saved",
                    "count": count
                }))?;
            } else {
                println!("Saved {} timezone(s) to config.", count);
            }
        }
        None => {
            info!("picker cancelled");
            if json {
                tzpick::ui::json::emit(serde_json::json!({ "event": "cancelled" }))?;
            } else {
                println!("Cancelled.");
            }
        }
    }
    Ok(())
}
