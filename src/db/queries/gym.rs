use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::models::{Gym, GymChanges, Mutation, Outcome};
use rusqlite::{Row, params};

fn map_gym(row: &Row) -> rusqlite::Result<Gym> {
    Ok(Gym {
        id: row.get("id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        chat: row.get("chat")?,
    })
}

impl Database {
    pub fn get_gyms(&self, telegram_chat_id: i64) -> AppResult<Vec<Gym>> {
        self.with_tx("get_gyms", telegram_chat_id, |tx| {
            super::collect_rows(
                tx,
                "SELECT * FROM gym WHERE chat = ?1 ORDER BY id",
                telegram_chat_id,
                map_gym,
            )
        })
    }

    pub fn add_gym(
        &self,
        telegram_chat_id: i64,
        name: &str,
        address: Option<&str>,
    ) -> AppResult<Mutation> {
        self.with_tx("add_gym", (telegram_chat_id, name, address), |tx| {
            tx.execute(
                "INSERT INTO gym (name, address, chat) VALUES (?1, ?2, ?3)",
                params![name, address, telegram_chat_id],
            )?;
            Ok((
                Some(tx.last_insert_rowid()),
                Outcome::success("зал добавлен в базу данных"),
            ))
        })
    }

    /// Removing a gym leaves schedule rows that reference it untouched.
    pub fn remove_gym(&self, gym_id: i64) -> AppResult<Mutation> {
        self.delete_by_id("remove_gym", "gym", gym_id, "зал удален из базы данных")
    }

    pub fn edit_gym(&self, gym_id: i64, changes: GymChanges) -> AppResult<Mutation> {
        let detail = match (&changes.name, &changes.address) {
            (Some(_), Some(_)) => "Изменены имя и адрес зала",
            (Some(_), None) => "Изменено имя зала",
            (None, Some(_)) => "Изменен адрес зала",
            (None, None) => "",
        };

        self.apply_changes(
            "edit_gym",
            "id",
            gym_id,
            &changes,
            "Данные о зале не были изменены: не передано ни одного поля",
            |_| detail.to_string(),
        )
    }
}
