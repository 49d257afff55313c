use super::not_found;
use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::models::{Admin, Mutation, Outcome};
use rusqlite::{Row, params};

fn map_admin(row: &Row) -> rusqlite::Result<Admin> {
    Ok(Admin {
        id: row.get("id")?,
        chat: row.get("chat")?,
        telegram_user_id: row.get("telegram_user_id")?,
    })
}

impl Database {
    pub fn get_admins(&self, telegram_chat_id: i64) -> AppResult<Vec<Admin>> {
        self.with_tx("get_admins", telegram_chat_id, |tx| {
            super::collect_rows(
                tx,
                "SELECT * FROM admin WHERE chat = ?1 ORDER BY id",
                telegram_chat_id,
                map_admin,
            )
        })
    }

    pub fn add_admin(&self, telegram_chat_id: i64, telegram_user_id: i64) -> AppResult<Mutation> {
        self.with_tx("add_admin", (telegram_chat_id, telegram_user_id), |tx| {
            tx.execute(
                "INSERT INTO admin (chat, telegram_user_id) VALUES (?1, ?2)",
                params![telegram_chat_id, telegram_user_id],
            )?;
            Ok((
                Some(tx.last_insert_rowid()),
                Outcome::success("В чат добавлен новый админ"),
            ))
        })
    }

    pub fn remove_admin(&self, admin_id: i64) -> AppResult<Mutation> {
        self.delete_by_id("remove_admin", "admin", admin_id, "Админ удален")
    }

    /// Remove by Telegram user instead of row id.
    pub fn remove_admin_by_user(
        &self,
        telegram_chat_id: i64,
        telegram_user_id: i64,
    ) -> AppResult<Mutation> {
        self.with_tx(
            "remove_admin_by_user",
            (telegram_chat_id, telegram_user_id),
            |tx| {
                let removed = tx.execute(
                    "DELETE FROM admin WHERE chat = ?1 AND telegram_user_id = ?2",
                    params![telegram_chat_id, telegram_user_id],
                )?;
                if removed == 0 {
                    return Ok((None, not_found(telegram_user_id)));
                }
                Ok((None, Outcome::success("Админ удален")))
            },
        )
    }
}
