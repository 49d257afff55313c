use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{gymchat, write_config};

#[test]
fn init_creates_schema_and_lists_tables() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bot.sqlite");
    let cfg = write_config(dir.path(), &db_path);

    gymchat()
        .args(["--config", cfg.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("schedule_correction"));

    assert!(db_path.exists());
    assert!(dir.path().join("gymchat-store.log").exists());
}

#[test]
fn chat_add_then_show_settings_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bot.sqlite");
    let cfg = write_config(dir.path(), &db_path);
    let cfg = cfg.to_str().unwrap();

    gymchat()
        .args(["--config", cfg, "chat", "add", "-100500"])
        .assert()
        .success()
        .stdout(contains("чат добавлен в базу данных"));

    gymchat()
        .args(["--config", cfg, "chat", "list"])
        .assert()
        .success()
        .stdout(contains("-100500"));

    gymchat()
        .args(["--config", cfg, "show", "-100500", "settings"])
        .assert()
        .success()
        .stdout(contains("\"chat\": -100500").and(contains("\"chat_gpt\": false")));
}

#[test]
fn db_flag_overrides_config_database() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), &dir.path().join("from_config.sqlite"));
    let override_path = dir.path().join("override.sqlite");

    gymchat()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "--db",
            override_path.to_str().unwrap(),
            "init",
        ])
        .assert()
        .success();

    assert!(override_path.exists());
    assert!(!dir.path().join("from_config.sqlite").exists());
}

#[test]
fn init_persists_db_override_into_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), &dir.path().join("from_config.sqlite"));
    let override_path = dir.path().join("override.sqlite");

    gymchat()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "--db",
            override_path.to_str().unwrap(),
            "init",
        ])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(saved.contains(override_path.to_str().unwrap()), "config was:\n{saved}");
    assert!(saved.contains("busy_timeout_ms: 5000"));

    // A later run without --db picks up the persisted path.
    gymchat()
        .args(["--config", cfg.to_str().unwrap(), "chat", "add", "11"])
        .assert()
        .success();
    assert!(!dir.path().join("from_config.sqlite").exists());
}

#[test]
fn successful_calls_are_written_to_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), &dir.path().join("bot.sqlite"));

    gymchat()
        .args(["--config", cfg.to_str().unwrap(), "chat", "add", "-100500"])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("gymchat-store.log")).unwrap();
    let line = log
        .lines()
        .find(|l| l.contains("new_chat"))
        .unwrap_or_else(|| panic!("no new_chat line in log:\n{log}"));
    assert!(line.contains("INFO"));
    assert!(line.contains("-100500"));
    assert!(line.contains("operation completed"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bot.sqlite");
    let cfg = write_config(dir.path(), &db_path);
    let cfg = cfg.to_str().unwrap();

    gymchat()
        .args(["--config", cfg, "chat", "add", "7"])
        .assert()
        .success();

    gymchat()
        .args(["--config", cfg, "clear"])
        .assert()
        .success()
        .stdout(contains("--yes"));

    gymchat()
        .args(["--config", cfg, "chat", "list"])
        .assert()
        .success()
        .stdout(contains("7"));

    gymchat()
        .args(["--config", cfg, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Все таблицы базы данных были очищены"));

    gymchat()
        .args(["--config", cfg, "chat", "list"])
        .assert()
        .success()
        .stdout(contains("No chats registered."));
}

#[test]
fn tables_prints_columns() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), &dir.path().join("bot.sqlite"));

    gymchat()
        .args(["--config", cfg.to_str().unwrap(), "tables"])
        .assert()
        .success()
        .stdout(contains("answer_alternative: id, chat, type, value"));
}

#[test]
fn duplicate_chat_fails_with_error_exit() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(dir.path(), &dir.path().join("bot.sqlite"));
    let cfg = cfg.to_str().unwrap();

    gymchat()
        .args(["--config", cfg, "chat", "add", "9"])
        .assert()
        .success();

    gymchat()
        .args(["--config", cfg, "chat", "add", "9"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}
