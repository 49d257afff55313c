//! Entity operations. Each public method is one scoped transaction.

mod admin;
mod answer;
mod chat;
mod correction;
mod gym;
mod schedule;

use crate::db::pool::Database;
use crate::db::update::{Changeset, SetClause};
use crate::errors::{AppError, AppResult};
use crate::models::{Mutation, Outcome};
use rusqlite::Connection;
use std::fmt::Debug;
use tracing::info;

pub(crate) fn not_found(id: i64) -> Outcome {
    Outcome::error(format!("Запись {} не найдена", id))
}

/// Collect a query into a Vec, stopping at the first row error.
pub(crate) fn collect_rows<T, F>(conn: &Connection, sql: &str, key: i64, map: F) -> AppResult<Vec<T>>
where
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([key], map)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

impl Database {
    /// Shared body of every `edit_*` that goes through the clause builder.
    ///
    /// An empty change set is answered with `empty_detail` without opening a
    /// connection. `describe` turns the applied clause into the success text.
    pub(crate) fn apply_changes<C, D>(
        &self,
        op: &str,
        key_column: &str,
        key: i64,
        changes: &C,
        empty_detail: &str,
        describe: D,
    ) -> AppResult<Mutation>
    where
        C: Changeset + Debug,
        D: FnOnce(&SetClause) -> String,
    {
        if changes.is_empty() {
            return Ok((Some(key), Outcome::error(empty_detail)));
        }

        let table = changes.table();
        self.with_tx(op, (key, changes), |tx| {
            let clause = SetClause::from_changeset(changes, self.catalog().columns(table))?
                .ok_or_else(|| AppError::Other(format!("{}: empty change set", op)))?;

            if clause.execute(tx, table, key_column, key)? == 0 {
                return Ok((Some(key), not_found(key)));
            }
            Ok((Some(key), Outcome::success(describe(&clause))))
        })
    }

    /// Shared body of every `remove_*` by primary key.
    pub(crate) fn delete_by_id(
        &self,
        op: &str,
        table: &str,
        id: i64,
        detail: &str,
    ) -> AppResult<Mutation> {
        self.with_tx(op, id, |tx| {
            let sql = format!("DELETE FROM \"{}\" WHERE id = ?1", table);
            if tx.execute(&sql, [id])? == 0 {
                return Ok((None, not_found(id)));
            }
            Ok((None, Outcome::success(detail)))
        })
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.catalog().table_names()
    }

    pub fn column_names(&self, table: &str) -> &[String] {
        self.catalog().columns(table)
    }

    /// Delete every row of every known table.
    pub fn clear_all_tables(&self) -> AppResult<String> {
        let tables: Vec<String> = self
            .table_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        self.with_tx("clear_all_tables", &tables, |tx| {
            // Children and parents go in one pass; checks run at commit.
            tx.execute_batch("PRAGMA defer_foreign_keys = ON;")?;
            for table in &tables {
                tx.execute(&format!("DELETE FROM \"{}\"", table), [])?;
            }
            info!(tables = tables.len(), "all tables cleared");
            Ok("Все таблицы базы данных были очищены".to_string())
        })
    }
}
