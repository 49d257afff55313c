use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(yes: bool, cfg: &Config) -> AppResult<()> {
    if !yes {
        warning("Refusing to delete all data without --yes.");
        return Ok(());
    }

    let db = Database::open_with(&cfg.database, cfg.store_options())?;
    let message = db.clear_all_tables()?;
    success(message);
    Ok(())
}
