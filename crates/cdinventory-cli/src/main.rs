use anyhow::Result;
use cdinventory_core::SnapshotFile;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod console;
mod menu;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "cdinventory", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Inventory file to load and save (default: ~/.local/share/cdinventory/CDInventory.dat)
    #[arg(long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Start the interactive menu (the default)
    ///
    /// The saved inventory is loaded on start. From the menu you can:
    ///
    /// - [l] reload the inventory from file, discarding unsaved changes
    /// - [a] add a CD (ID, title, artist)
    /// - [i] display the current inventory
    /// - [d] delete every CD with a given ID
    /// - [s] save the inventory to file, replacing its previous contents
    /// - [x] exit
    ///
    /// Nothing is written to disk until you save.
    Run,
    /// Print the saved inventory and exit
    List,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration and the config file location
    Show,
    /// Create the config file from the template if it does not exist
    Init,
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.file {
        Some(path) => Config::load_with_inventory_path(path)?,
        None => Config::load()?,
    };

    init_logging(&config.log_level);

    let snapshot = SnapshotFile::new(&config.inventory_path);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run_interactive(snapshot)?,
        Commands::List => commands::show_inventory(&snapshot)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
