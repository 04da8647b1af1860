//! rSkillTracker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use store::{ProgressRepository, SqliteStore};
use tracing::{debug, warn};

/// Central command dispatcher
pub fn dispatch<R: ProgressRepository>(cli: &Cli, cfg: &Config, store: &mut R) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, store),
        Commands::Summary | Commands::List => cli::commands::summary::handle(&cli.command, store),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, store),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, store),
        Commands::Skills => cli::commands::skills::handle(cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, store),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, store),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;
    utils::logging::enable_logging(&cfg.log_level);

    // 3️⃣ database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    debug!(db = %cfg.database, "configuration loaded");

    // 4️⃣ one store, owned here and lent to the handlers
    let mut store = SqliteStore::new(cfg.database.clone());

    if cli.fresh {
        warn!(db = %cfg.database, "--fresh: discarding all history");
        store.reset()?;
    }

    dispatch(&cli, &cfg, &mut store)
}
