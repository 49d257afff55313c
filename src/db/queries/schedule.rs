use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::models::schedule::is_valid_weekday;
use crate::models::{Mutation, Outcome, ScheduleChanges, ScheduleEntry};
use crate::utils::time::{time_column, time_to_iso};
use chrono::NaiveTime;
use rusqlite::{Row, params};

const INVALID_WEEKDAY: &str = "День недели должен быть числом от 1 до 7";

fn map_schedule(row: &Row) -> rusqlite::Result<ScheduleEntry> {
    Ok(ScheduleEntry {
        id: row.get("id")?,
        chat: row.get("chat")?,
        weekday: row.get("weekday")?,
        sport: row.get("sport")?,
        gym: row.get("gym")?,
        time: time_column(row, "time")?,
    })
}

impl Database {
    /// Weekly schedule of a chat, Monday first.
    pub fn get_schedule(&self, telegram_chat_id: i64) -> AppResult<Vec<ScheduleEntry>> {
        self.with_tx("get_schedule", telegram_chat_id, |tx| {
            super::collect_rows(
                tx,
                "SELECT * FROM schedule WHERE chat = ?1 ORDER BY weekday, time, id",
                telegram_chat_id,
                map_schedule,
            )
        })
    }

    pub fn add_schedule(
        &self,
        telegram_chat_id: i64,
        weekday: u8,
        sport: &str,
        gym: i64,
        time: NaiveTime,
    ) -> AppResult<Mutation> {
        if !is_valid_weekday(weekday) {
            return Ok((None, Outcome::error(INVALID_WEEKDAY)));
        }

        self.with_tx(
            "add_schedule",
            (telegram_chat_id, weekday, sport, gym, time),
            |tx| {
                tx.execute(
                    "INSERT INTO schedule (chat, weekday, sport, gym, time) VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![telegram_chat_id, weekday, sport, gym, time_to_iso(&time)],
                )?;
                Ok((
                    Some(tx.last_insert_rowid()),
                    Outcome::success("Добавлена новая тренировка в расписание"),
                ))
            },
        )
    }

    pub fn remove_schedule(&self, schedule_id: i64) -> AppResult<Mutation> {
        self.delete_by_id(
            "remove_schedule",
            "schedule",
            schedule_id,
            "Тренировка удалена из расписания",
        )
    }

    pub fn edit_schedule(&self, schedule_id: i64, changes: ScheduleChanges) -> AppResult<Mutation> {
        if let Some(weekday) = changes.new_weekday
            && !is_valid_weekday(weekday)
        {
            return Ok((Some(schedule_id), Outcome::error(INVALID_WEEKDAY)));
        }

        self.apply_changes(
            "edit_schedule",
            "id",
            schedule_id,
            &changes,
            "Расписание не было изменено (параметры не были переданы)",
            |clause| {
                format!(
                    "Расписание изменено. Отредактированы следующие поля: {}",
                    clause.summary()
                )
            },
        )
    }
}
