use super::not_found;
use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::models::{Chat, ChatSettings, ChatSettingsChanges, Mutation, Outcome};
use rusqlite::{Row, params};

fn map_settings(row: &Row) -> rusqlite::Result<ChatSettings> {
    Ok(ChatSettings {
        chat: row.get("chat")?,
        chat_gpt: row.get("chat_gpt")?,
        welcome_meme: row.get("welcome_meme")?,
    })
}

impl Database {
    /// Register a chat together with its settings row, seeded from the store options.
    pub fn new_chat(&self, telegram_chat_id: i64) -> AppResult<Mutation> {
        let opts = self.options();
        self.with_tx("new_chat", telegram_chat_id, |tx| {
            tx.execute(
                "INSERT INTO chat (telegram_chat_id) VALUES (?1)",
                [telegram_chat_id],
            )?;
            tx.execute(
                "INSERT INTO chat_settings (chat, chat_gpt, welcome_meme) VALUES (?1, ?2, ?3)",
                params![
                    telegram_chat_id,
                    opts.default_chat_gpt,
                    opts.default_welcome_meme
                ],
            )?;
            Ok((
                Some(telegram_chat_id),
                Outcome::success("чат добавлен в базу данных"),
            ))
        })
    }

    pub fn get_chats(&self) -> AppResult<Vec<Chat>> {
        self.with_tx("get_chats", (), |tx| {
            let mut stmt = tx.prepare("SELECT telegram_chat_id FROM chat ORDER BY telegram_chat_id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Chat {
                    telegram_chat_id: row.get("telegram_chat_id")?,
                })
            })?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    /// Remove a chat and its settings. Rows owned by the chat must be removed
    /// first; otherwise the foreign key check fails and nothing is deleted.
    pub fn remove_chat(&self, telegram_chat_id: i64) -> AppResult<Mutation> {
        self.with_tx("remove_chat", telegram_chat_id, |tx| {
            tx.execute("DELETE FROM chat_settings WHERE chat = ?1", [telegram_chat_id])?;
            if tx.execute(
                "DELETE FROM chat WHERE telegram_chat_id = ?1",
                [telegram_chat_id],
            )? == 0
            {
                return Ok((None, not_found(telegram_chat_id)));
            }
            Ok((None, Outcome::success("чат удален из базы данных")))
        })
    }

    pub fn get_chat_settings(&self, telegram_chat_id: i64) -> AppResult<Vec<ChatSettings>> {
        self.with_tx("get_chat_settings", telegram_chat_id, |tx| {
            super::collect_rows(
                tx,
                "SELECT * FROM chat_settings WHERE chat = ?1",
                telegram_chat_id,
                map_settings,
            )
        })
    }

    pub fn edit_chat_settings(
        &self,
        telegram_chat_id: i64,
        changes: ChatSettingsChanges,
    ) -> AppResult<Mutation> {
        self.apply_changes(
            "edit_chat_settings",
            "chat",
            telegram_chat_id,
            &changes,
            "Параметры не были переданы. Настройки не изменены",
            |clause| {
                format!(
                    "Настройки были изменены. Отредактированы следующие поля: {}",
                    clause.summary()
                )
            },
        )
    }

    /// Reset the welcome image. A partial edit cannot do this: an absent
    /// value there means "leave as is".
    pub fn clear_welcome_meme(&self, telegram_chat_id: i64) -> AppResult<Mutation> {
        self.with_tx("clear_welcome_meme", telegram_chat_id, |tx| {
            if tx.execute(
                "UPDATE chat_settings SET welcome_meme = NULL WHERE chat = ?1",
                [telegram_chat_id],
            )? == 0
            {
                return Ok((Some(telegram_chat_id), not_found(telegram_chat_id)));
            }
            Ok((
                Some(telegram_chat_id),
                Outcome::success("Приветственный мем удален"),
            ))
        })
    }
}
