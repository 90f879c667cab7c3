//! arbeit library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::End { .. } => cli::commands::end::handle(&cli.command, cfg),
        Commands::Break { .. } => cli::commands::breaks::handle(&cli.command, cfg),
        Commands::Today => cli::commands::today::handle(&cli.command, cfg),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, cfg),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Resolve the data file once; everything below gets it explicitly.
    let cfg = Config::resolve(cli.file.as_deref())?;

    dispatch(&cli, &cfg)
}
