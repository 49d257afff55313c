//! gymchat-store library root.
//! Persistence for the gym-chat scheduling bot plus the maintenance CLI.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use std::path::{Path, PathBuf};

pub use db::Database;
pub use errors::{AppError, AppResult, FailureKind};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg, &config_path(cli)),
        Commands::Chat { action } => cli::commands::chat::handle(action, cfg),
        Commands::Show { chat, entity } => cli::commands::show::handle(*chat, *entity, cfg),
        Commands::Tables => cli::commands::tables::handle(cfg),
        Commands::Clear { yes } => cli::commands::clear::handle(*yes, cfg),
    }
}

/// The config file this run reads from and `init` writes to.
fn config_path(cli: &Cli) -> PathBuf {
    match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::config_file(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load_from(&config_path(&cli))?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    logging::init_file_logging(Path::new(&cfg.log_file), cli.debug)?;

    dispatch(&cli, &cfg)
}
