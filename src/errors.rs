//! Unified error type.
//! Every storage operation, the config layer and the CLI return AppError so
//! failures surface with a kind and a message instead of being swallowed.

use rusqlite::ErrorCode;
use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Cannot open database {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Unknown column '{column}' in table '{table}'")]
    UnknownColumn { table: String, column: String },

    // ---------------------------
    // Stored value parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Coarse category of a failure, for callers that need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Open,
    Constraint,
    Busy,
    Sql,
    Conversion,
    Config,
    Io,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Open => "open",
            FailureKind::Constraint => "constraint",
            FailureKind::Busy => "busy",
            FailureKind::Sql => "sql",
            FailureKind::Conversion => "conversion",
            FailureKind::Config => "config",
            FailureKind::Io => "io",
            FailureKind::Other => "other",
        };
        f.write_str(s)
    }
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::Io(_) => FailureKind::Io,
            AppError::Open { .. } => FailureKind::Open,
            AppError::Db(e) => sqlite_kind(e),
            AppError::UnknownColumn { .. } => FailureKind::Sql,
            AppError::InvalidDate(_) | AppError::InvalidTime(_) => FailureKind::Conversion,
            AppError::Config(_) => FailureKind::Config,
            AppError::Other(_) => FailureKind::Other,
        }
    }
}

fn sqlite_kind(e: &rusqlite::Error) -> FailureKind {
    match e {
        rusqlite::Error::SqliteFailure(err, _) => match err.code {
            ErrorCode::ConstraintViolation => FailureKind::Constraint,
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => FailureKind::Busy,
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::ReadOnly
            | ErrorCode::PermissionDenied
            | ErrorCode::SystemIoFailure
            | ErrorCode::DiskFull => FailureKind::Io,
            _ => FailureKind::Sql,
        },
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => FailureKind::Conversion,
        _ => FailureKind::Sql,
    }
}
