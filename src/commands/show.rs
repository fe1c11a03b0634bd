//! Show command handler

use std::path::Path;

use anyhow::Result;

pub fn cmd_show(config_path: &Path, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?.with_env_overrides();

    if json {
        tzpick::ui::json::emit(serde_json::json!(config.timezones))?;
        return Ok(());
    }

    if config.timezones.is_empty() {
        println!("No timezones saved. Run 'tzpick' to pick some.");
        return Ok(());
    }
    for (i, tz) in config.timezones.iter().enumerate() {
        println!("{:>2}. {}", i + 1, tz);
    }
    Ok(())
}
