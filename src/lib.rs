//! hhreg library root.
//! Exposes the CLI parser, the high-level run() function and the ledger
//! engine (models, repository, services).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Entry { action } => cli::commands::entry::handle(action, cfg),
        Commands::Report { action } => cli::commands::report::handle(action, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config caricata una sola volta
    let mut cfg = Config::load()?;

    // override del DB da riga di comando
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
