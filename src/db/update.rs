//! Partial-update clause builder.
//!
//! An edit only touches the columns the caller actually supplied. Each
//! entity describes its editable columns as a list of [`Field`]s; the builder
//! keeps the provided ones, strips the parameter prefix (`new_weekday` ->
//! `weekday`), checks the column against the cached schema and binds every
//! value as a parameter.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use rusqlite::types::Value;

/// One editable column of an entity. `value: None` means "leave untouched".
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub value: Option<Value>,
}

impl Field {
    pub fn new<T: Into<Value>>(name: &'static str, label: &'static str, value: Option<T>) -> Self {
        Self {
            name,
            label,
            value: value.map(Into::into),
        }
    }
}

/// Typed set of optional edits for one table.
pub trait Changeset {
    /// Prefix carried by field names that is not part of the column name.
    const PREFIX: &'static str = "";

    fn table(&self) -> &'static str;

    fn fields(&self) -> Vec<Field>;

    /// True when no field carries a value; such an edit must not reach storage.
    fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.value.is_none())
    }
}

/// `col = ?N, ...` fragment plus its bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub sql: String,
    pub params: Vec<Value>,
    pub labels: Vec<&'static str>,
}

pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return name;
    }
    name.strip_prefix(prefix).unwrap_or(name)
}

impl SetClause {
    /// Build the assignment list. Returns `Ok(None)` when no field is set:
    /// an empty SET is invalid SQL, callers short-circuit before this point.
    pub fn build(
        table: &str,
        prefix: &str,
        fields: Vec<Field>,
        columns: &[String],
    ) -> AppResult<Option<Self>> {
        let mut assignments = Vec::new();
        let mut params = Vec::new();
        let mut labels = Vec::new();

        for field in fields {
            let Some(value) = field.value else {
                continue;
            };

            let column = strip_prefix(field.name, prefix);
            if !columns.iter().any(|c| c == column) {
                return Err(AppError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }

            params.push(value);
            assignments.push(format!("\"{}\" = ?{}", column, params.len()));
            labels.push(field.label);
        }

        if assignments.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self {
            sql: assignments.join(", "),
            params,
            labels,
        }))
    }

    pub fn from_changeset<C: Changeset>(changes: &C, columns: &[String]) -> AppResult<Option<Self>> {
        Self::build(changes.table(), C::PREFIX, changes.fields(), columns)
    }

    /// Human-readable list of the edited fields.
    pub fn summary(&self) -> String {
        self.labels.join(", ")
    }

    /// Run `UPDATE table SET <clause> WHERE key_column = key`.
    pub fn execute(
        &self,
        conn: &Connection,
        table: &str,
        key_column: &str,
        key: i64,
    ) -> AppResult<usize> {
        let sql = format!(
            "UPDATE \"{}\" SET {} WHERE \"{}\" = ?{}",
            table,
            self.sql,
            key_column,
            self.params.len() + 1
        );

        let mut values: Vec<&Value> = self.params.iter().collect();
        let key = Value::Integer(key);
        values.push(&key);

        let changed = conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(changed)
    }
}
