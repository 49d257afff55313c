#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use gymchat_store::Database;
use gymchat_store::config::StoreOptions;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

pub const CHAT: i64 = -1001234567890;

pub fn gymchat() -> Command {
    cargo_bin_cmd!("gymchat-store")
}

/// Fresh database file inside its own temp dir; keep the TempDir alive.
pub fn temp_db() -> (TempDir, Database) {
    temp_db_with(StoreOptions::default())
}

pub fn temp_db_with(options: StoreOptions) -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = Database::open_with(dir.path().join("store.sqlite"), options).expect("open db");
    (dir, db)
}

/// Database with one registered chat.
pub fn db_with_chat() -> (TempDir, Database) {
    let (dir, db) = temp_db();
    db.new_chat(CHAT).expect("new chat");
    (dir, db)
}

/// Write a config file pointing at `db_path`, with the log kept in `dir`.
pub fn write_config(dir: &Path, db_path: &Path) -> PathBuf {
    let path = dir.join("gymchat-store.conf");
    let yaml = format!(
        "database: {}\nlog_file: {}\n",
        db_path.display(),
        dir.join("gymchat-store.log").display()
    );
    fs::write(&path, yaml).expect("write config");
    path
}

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a debug-level subscriber and return what it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buf.contents())
}

pub fn error_lines(logs: &str) -> Vec<&str> {
    logs.lines().filter(|l| l.contains("ERROR")).collect()
}
