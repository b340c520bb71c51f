mod commands;
mod logging;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daybook_core::config::DaybookConfig;
use daybook_core::service::CalendarService;
use daybook_core::store::RecordStore;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Keep notes for every day of a month in named calendars")]
struct Cli {
    /// Calendar store file (overrides store_path from the config file)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Read this config file instead of ~/.config/daybook/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Without a command, daybook starts the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new calendar
    New,
    /// List stored calendars
    List,
    /// Show the month grid of a calendar
    Show {
        name: String,

        /// Print the stored JSON object instead of the grid
        #[arg(long)]
        json: bool,
    },
    /// Print the notes of one day
    Read { name: String, day: u32 },
    /// Replace the notes of one day
    Edit {
        name: String,
        day: u32,
        text: String,
    },
    /// Delete a calendar
    Delete {
        name: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose)?;

    let service = build_service(cli.store, cli.config.as_deref())?;

    match cli.command {
        None => commands::menu::run(&service),
        Some(Commands::New) => commands::new::run(&service),
        Some(Commands::List) => commands::list::run(&service),
        Some(Commands::Show { name, json }) => commands::show::run(&service, &name, json),
        Some(Commands::Read { name, day }) => commands::read::run(&service, &name, day),
        Some(Commands::Edit { name, day, text }) => {
            commands::edit::run(&service, &name, day, text)
        }
        Some(Commands::Delete { name, yes }) => commands::delete::run(&service, &name, yes),
    }
}

fn build_service(store: Option<PathBuf>, config_path: Option<&Path>) -> Result<CalendarService> {
    let store_path = match store {
        Some(path) => path,
        None => {
            let config = match config_path {
                Some(path) => DaybookConfig::load_from(path)?,
                None => DaybookConfig::load()?,
            };
            config.store_path()
        }
    };

    debug!("Using store at {}", store_path.display());
    Ok(CalendarService::new(RecordStore::new(store_path)))
}
