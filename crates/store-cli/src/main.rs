//! Form entity store CLI
//!
//! Inspects and maintains an on-disk entity store.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use store_core::{EntityStore, StoreSettings};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    } else {
        // Already initialized is fine
        let _ = store_core::logging::init();
    }

    let settings = resolve_settings(&cli)?;
    let store = EntityStore::open(settings)?;
    execute_command(&store, cli.command)
}

fn resolve_settings(cli: &Cli) -> Result<StoreSettings> {
    let mut settings = match &cli.config {
        Some(path) => StoreSettings::load_or_default(path)?,
        None => StoreSettings::default(),
    };
    if let Some(root) = &cli.store {
        settings.root = root.clone();
    }
    Ok(settings)
}

fn execute_command(store: &EntityStore, cmd: Commands) -> Result<()> {
    let entities = store.entities();
    match cmd {
        Commands::Roots => commands::run_roots(),
        Commands::Get { id, json } => commands::run_get(entities, id, json),
        Commands::Children { parent, json } => commands::run_children(entities, parent, json),
        Commands::Descendants { id, json } => commands::run_descendants(entities, id, json),
        Commands::CreateFolder { name, parent } => {
            commands::run_create_folder(entities, &name, parent)
        }
        Commands::Move { id, parent } => commands::run_move(entities, id, parent),
        Commands::Delete { id } => commands::run_delete(entities, id),
    }
}
