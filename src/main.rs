//! tzpick CLI - interactive timezone picker
//!
//! Usage: tzpick [COMMAND]
//!
//! Commands:
//!   wizard  Open the picker and save the result (default)
//!   list    List areas, locations, or timezones
//!   show    Print the saved selection

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::list::ListTarget;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = tzpick::logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "starting");

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => {
            let path = commands::resolve_config_path(cli.config.as_deref())?;
            commands::wizard::cmd_wizard(&path, cli.json, cli.ascii, &log)
        }
        Commands::List {
            areas,
            locations,
            timezones: _,
        } => commands::list::cmd_list(&ListTarget::from_flags(areas, locations), cli.json),
        Commands::Show => {
            let path = commands::resolve_config_path(cli.config.as_deref())?;
            commands::show::cmd_show(&path, cli.json)
        }
    }
}
