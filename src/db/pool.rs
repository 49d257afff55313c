//! Database handle and the scoped transaction wrapper.
//!
//! No connection is kept between calls: every public operation opens its own
//! connection, runs inside one transaction and releases it on return.

use crate::config::StoreOptions;
use crate::db::catalog::Catalog;
use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Transaction};
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Span, error, info, info_span};

pub struct Database {
    path: PathBuf,
    options: StoreOptions,
    catalog: Catalog,
    span: Span,
}

impl Database {
    /// Open (creating if needed) the database file and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::open_with(path, StoreOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: StoreOptions) -> AppResult<Self> {
        let span = info_span!("store", db = %path.as_ref().display());
        Self::open_with_span(path, options, span)
    }

    /// Like [`Database::open_with`], but every operation is logged inside `span`.
    pub fn open_with_span(
        path: impl AsRef<Path>,
        options: StoreOptions,
        span: Span,
    ) -> AppResult<Self> {
        let mut db = Self {
            path: path.as_ref().to_path_buf(),
            options,
            catalog: Catalog::default(),
            span,
        };

        db.catalog = db.with_tx("bootstrap", (), |tx| {
            run_pending_migrations(tx)?;
            Catalog::load(tx)
        })?;

        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open a fresh connection with per-connection pragmas applied.
    fn connect(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.path).map_err(|source| AppError::Open {
            path: self.path.display().to_string(),
            source,
        })?;
        conn.busy_timeout(Duration::from_millis(self.options.busy_timeout_ms))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Run `body` inside a connection and transaction scoped to this call.
    ///
    /// Commits when `body` returns `Ok` and logs one info-level event; on any error the transaction is
    /// rolled back, one error-level event is logged with `op` and `args`, and
    /// the error is returned. The connection is released on every path.
    pub fn with_tx<T, A, F>(&self, op: &str, args: A, body: F) -> AppResult<T>
    where
        A: Debug,
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let _entered = self.span.enter();

        let result = self.connect().and_then(|mut conn| {
            let tx = conn.transaction()?;
            let value = body(&tx)?;
            tx.commit()?;
            Ok(value)
        });

        match &result {
            Ok(_) => info!(op, args = ?args, "operation completed"),
            Err(e) => error!(op, args = ?args, kind = %e.kind(), error = %e, "operation failed"),
        }

        result
    }
}
