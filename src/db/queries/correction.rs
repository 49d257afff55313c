use crate::db::pool::Database;
use crate::errors::AppResult;
use crate::models::{
    Mutation, NewScheduleCorrection, Outcome, ScheduleCorrection, ScheduleCorrectionChanges,
};
use crate::utils::time::{date_to_iso, now_millis, opt_date_column, opt_time_column, time_to_iso};
use rusqlite::{Row, params};

fn map_correction(row: &Row) -> rusqlite::Result<ScheduleCorrection> {
    Ok(ScheduleCorrection {
        id: row.get("id")?,
        chat: row.get("chat")?,
        date_created: row.get("date_created")?,
        correction_type: row.get("correction_type")?,
        old_date: opt_date_column(row, "old_date")?,
        old_time: opt_time_column(row, "old_time")?,
        old_gym: row.get("old_gym")?,
        new_date: opt_date_column(row, "new_date")?,
        new_time: opt_time_column(row, "new_time")?,
        new_gym: row.get("new_gym")?,
    })
}

impl Database {
    /// Corrections of a chat, oldest first.
    pub fn get_schedule_corrections(&self, telegram_chat_id: i64) -> AppResult<Vec<ScheduleCorrection>> {
        self.with_tx("get_schedule_corrections", telegram_chat_id, |tx| {
            super::collect_rows(
                tx,
                "SELECT * FROM schedule_correction WHERE chat = ?1 ORDER BY date_created, id",
                telegram_chat_id,
                map_correction,
            )
        })
    }

    pub fn add_schedule_correction(
        &self,
        telegram_chat_id: i64,
        correction: NewScheduleCorrection,
    ) -> AppResult<Mutation> {
        self.with_tx(
            "add_schedule_correction",
            (telegram_chat_id, &correction),
            |tx| {
                tx.execute(
                    "INSERT INTO schedule_correction (
                        chat, date_created, correction_type,
                        old_date, old_time, old_gym,
                        new_date, new_time, new_gym
                     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        telegram_chat_id,
                        now_millis(),
                        correction.correction_type,
                        correction.old_date.as_ref().map(date_to_iso),
                        correction.old_time.as_ref().map(time_to_iso),
                        correction.old_gym,
                        correction.new_date.as_ref().map(date_to_iso),
                        correction.new_time.as_ref().map(time_to_iso),
                        correction.new_gym,
                    ],
                )?;
                Ok((
                    Some(tx.last_insert_rowid()),
                    Outcome::success("Добавлена новая поправка в расписание"),
                ))
            },
        )
    }

    pub fn remove_schedule_correction(&self, schedule_correction_id: i64) -> AppResult<Mutation> {
        self.delete_by_id(
            "remove_schedule_correction",
            "schedule_correction",
            schedule_correction_id,
            "Поправка в расписание удалена из БД",
        )
    }

    pub fn edit_schedule_correction(
        &self,
        schedule_correction_id: i64,
        changes: ScheduleCorrectionChanges,
    ) -> AppResult<Mutation> {
        self.apply_changes(
            "edit_schedule_correction",
            "id",
            schedule_correction_id,
            &changes,
            "Поправка в расписание не была изменена (параметры не были переданы)",
            |clause| {
                format!(
                    "Поправка в расписание изменена. Отредактированы следующие поля: {}",
                    clause.summary()
                )
            },
        )
    }
}
