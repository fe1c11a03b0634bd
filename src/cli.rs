use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tzpick - choose and order the timezones you care about
#[derive(Parser, Debug)]
#[command(name = "tzpick")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'tzpick' without arguments to open the picker.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv, -vvvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to read and write (default: <config dir>/tzpick/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use ASCII icons instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive picker and save the result (default)
    Wizard,

    /// List timezone data
    List {
        /// List all areas
        #[arg(long, conflicts_with_all = ["locations", "timezones"])]
        areas: bool,

        /// List the locations in one area
        #[arg(long, value_name = "AREA", conflicts_with = "timezones")]
        locations: Option<String>,

        /// List every timezone (default)
        #[arg(long)]
        timezones: bool,
    },

    /// Print the saved selection in order
    Show,
}
