use crate::cli::parser::Entity;
use crate::config::Config;
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

fn print_json<T: Serialize>(rows: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

pub fn handle(chat: i64, entity: Entity, cfg: &Config) -> AppResult<()> {
    let db = Database::open_with(&cfg.database, cfg.store_options())?;

    match entity {
        Entity::Settings => print_json(&db.get_chat_settings(chat)?),
        Entity::Gyms => print_json(&db.get_gyms(chat)?),
        Entity::Schedule => print_json(&db.get_schedule(chat)?),
        Entity::Corrections => print_json(&db.get_schedule_corrections(chat)?),
        Entity::Admins => print_json(&db.get_admins(chat)?),
        Entity::Answers => print_json(&db.get_answer_alternatives_grouped_by_types(chat)?),
    }
}
