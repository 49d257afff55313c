use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the effective config (including a `--db`
/// override) to `config_path`, then open and thereby bootstrap the database.
pub fn handle(cfg: &Config, config_path: &Path) -> AppResult<()> {
    cfg.save_to(config_path)?;
    info(format!("Config file: {}", config_path.display()));

    let db = Database::open_with(&cfg.database, cfg.store_options())?;

    success(format!("Database initialized at {}", db.path().display()));
    info(format!("Tables: {}", db.table_names().join(", ")));
    Ok(())
}
