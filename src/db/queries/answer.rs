use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::models::answer::group_by_type;
use crate::models::{AnswerAlternative, Mutation, Outcome};
use rusqlite::{Row, params};
use std::collections::BTreeMap;

fn map_answer(row: &Row) -> rusqlite::Result<AnswerAlternative> {
    Ok(AnswerAlternative {
        id: row.get("id")?,
        chat: row.get("chat")?,
        answer_type: row.get("type")?,
        value: row.get("value")?,
    })
}

impl Database {
    pub fn get_answer_alternatives(&self, telegram_chat_id: i64) -> AppResult<Vec<AnswerAlternative>> {
        self.with_tx("get_answer_alternatives", telegram_chat_id, |tx| {
            super::collect_rows(
                tx,
                "SELECT * FROM answer_alternative WHERE chat = ?1 ORDER BY id",
                telegram_chat_id,
                map_answer,
            )
        })
    }

    pub fn add_answer_alternative(
        &self,
        telegram_chat_id: i64,
        answer_type: &str,
        answer_value: &str,
    ) -> AppResult<Mutation> {
        self.with_tx(
            "add_answer_alternative",
            (telegram_chat_id, answer_type, answer_value),
            |tx| {
                tx.execute(
                    "INSERT INTO answer_alternative (chat, type, value) VALUES (?1, ?2, ?3)",
                    params![telegram_chat_id, answer_type, answer_value],
                )?;
                Ok((
                    Some(tx.last_insert_rowid()),
                    Outcome::success(format!(
                        "Добавлен вариант ответа: {} -> {}",
                        answer_type, answer_value
                    )),
                ))
            },
        )
    }

    pub fn remove_answer_alternative(&self, answer_alternative_id: i64) -> AppResult<Mutation> {
        self.delete_by_id(
            "remove_answer_alternative",
            "answer_alternative",
            answer_alternative_id,
            "Удален вариант ответа",
        )
    }

    /// `type -> [value, ...]`, built from one `get_answer_alternatives` call.
    ///
    /// The read runs (and is logged) as `get_answer_alternatives`; a failure
    /// here shows up in the log under that op name.
    pub fn get_answer_alternatives_grouped_by_types(
        &self,
        telegram_chat_id: i64,
    ) -> AppResult<BTreeMap<String, Vec<String>>> {
        let alternatives = self.get_answer_alternatives(telegram_chat_id)?;
        Ok(group_by_type(&alternatives))
    }
}
