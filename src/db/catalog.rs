//! Table and column names read back from the live schema after bootstrap.

use crate::errors::AppResult;
use rusqlite::Connection;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<(String, Vec<String>)>,
}

impl Catalog {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        let names = table_names(conn)?;
        let mut tables = Vec::with_capacity(names.len());
        for name in names {
            let columns = column_names(conn, &name)?;
            tables.push((name, columns));
        }
        Ok(Self { tables })
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|(t, _)| t.as_str()).collect()
    }

    /// Cached column list; empty for a table the catalog does not know.
    pub fn columns(&self, table: &str) -> &[String] {
        self.tables
            .iter()
            .find(|(t, _)| t == table)
            .map(|(_, c)| c.as_slice())
            .unwrap_or(&[])
    }
}

pub fn table_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn column_names(conn: &Connection, table: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
    let rows = stmt.query_map([table], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
