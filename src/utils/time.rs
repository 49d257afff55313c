//! ISO-8601 text <-> chrono conversions used by the row mappers.
//!
//! Times are written with `NaiveTime`'s Display (`HH:MM:SS[.fff]`), dates as
//! `YYYY-MM-DD`; both parse back losslessly.

use crate::errors::AppError;
use chrono::{NaiveDate, NaiveTime, Utc};
use rusqlite::Row;
use rusqlite::types::Type;

pub fn time_to_iso(t: &NaiveTime) -> String {
    t.to_string()
}

pub fn date_to_iso(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_time(s: &str) -> Option<NaiveTime> {
    s.parse::<NaiveTime>()
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Current instant as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn conversion_failure(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Read a NOT NULL time column.
pub fn time_column(row: &Row, column: &str) -> rusqlite::Result<NaiveTime> {
    let raw: String = row.get(column)?;
    let idx = row.as_ref().column_index(column)?;
    parse_iso_time(&raw).ok_or_else(|| conversion_failure(idx, AppError::InvalidTime(raw)))
}

/// Read a nullable time column; NULL or empty text yields None.
pub fn opt_time_column(row: &Row, column: &str) -> rusqlite::Result<Option<NaiveTime>> {
    let raw: Option<String> = row.get(column)?;
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => {
            let idx = row.as_ref().column_index(column)?;
            parse_iso_time(&s)
                .map(Some)
                .ok_or_else(|| conversion_failure(idx, AppError::InvalidTime(s)))
        }
    }
}

/// Read a nullable date column; NULL or empty text yields None.
pub fn opt_date_column(row: &Row, column: &str) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(column)?;
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => {
            let idx = row.as_ref().column_index(column)?;
            parse_iso_date(&s)
                .map(Some)
                .ok_or_else(|| conversion_failure(idx, AppError::InvalidDate(s)))
        }
    }
}
