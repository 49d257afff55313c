//! Schema bootstrap. Every statement is idempotent, so this runs on each open.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Chat and its 1:1 settings row.
fn ensure_chat_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS chat (
            telegram_chat_id INTEGER PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS chat_settings (
            chat          INTEGER PRIMARY KEY REFERENCES chat(telegram_chat_id),
            chat_gpt      INTEGER NOT NULL DEFAULT 0,
            welcome_meme  TEXT
        );
        "#,
    )?;
    Ok(())
}

fn ensure_gym_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS gym (
            id       INTEGER PRIMARY KEY,
            name     TEXT NOT NULL,
            address  TEXT,
            chat     INTEGER NOT NULL REFERENCES chat(telegram_chat_id)
        );

        CREATE INDEX IF NOT EXISTS idx_gym_chat ON gym(chat);
        "#,
    )?;
    Ok(())
}

/// Gym references are plain integers: dropping a gym leaves schedule rows alone.
fn ensure_schedule_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schedule (
            id       INTEGER PRIMARY KEY,
            chat     INTEGER NOT NULL REFERENCES chat(telegram_chat_id),
            weekday  INTEGER NOT NULL CHECK (weekday BETWEEN 1 AND 7),
            sport    TEXT NOT NULL,
            gym      INTEGER NOT NULL,
            time     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_schedule_chat_weekday ON schedule(chat, weekday);

        CREATE TABLE IF NOT EXISTS schedule_correction (
            id               INTEGER PRIMARY KEY,
            chat             INTEGER NOT NULL REFERENCES chat(telegram_chat_id),
            date_created     INTEGER NOT NULL,
            correction_type  TEXT NOT NULL,
            old_date         TEXT,
            old_time         TEXT,
            old_gym          INTEGER,
            new_date         TEXT,
            new_time         TEXT,
            new_gym          INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_schedule_correction_chat
            ON schedule_correction(chat, date_created);
        "#,
    )?;
    Ok(())
}

fn ensure_admin_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS admin (
            id                INTEGER PRIMARY KEY,
            chat              INTEGER NOT NULL REFERENCES chat(telegram_chat_id),
            telegram_user_id  INTEGER NOT NULL,
            UNIQUE (chat, telegram_user_id)
        );
        "#,
    )?;
    Ok(())
}

fn ensure_answer_alternative_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS answer_alternative (
            id     INTEGER PRIMARY KEY,
            chat   INTEGER NOT NULL REFERENCES chat(telegram_chat_id),
            type   TEXT NOT NULL,
            value  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_answer_alternative_chat ON answer_alternative(chat);
        "#,
    )?;
    Ok(())
}

/// Create every table the store works with.
///
/// Invoked by `Database::open`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_chat_tables(conn)?;
    ensure_gym_table(conn)?;
    ensure_schedule_tables(conn)?;
    ensure_admin_table(conn)?;
    ensure_answer_alternative_table(conn)?;
    Ok(())
}
