//! rIdleReport library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod report;
pub mod transport;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve the config file (--config overrides the default location)
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // init must work even when the existing file is broken
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli.command, &config_path);
    }

    // 3️⃣ load config once
    let cfg = Config::load_from(&config_path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
