use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let db = Database::open_with(&cfg.database, cfg.store_options())?;

    for table in db.table_names() {
        println!("{}: {}", table, db.column_names(table).join(", "));
    }
    Ok(())
}
