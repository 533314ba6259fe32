#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hhreg() -> Command {
    let mut cmd = cargo_bin_cmd!("hhreg");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hhreg.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh DB with its schema in place
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    hhreg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Log a day through the CLI and expect success
pub fn entry_new(db_path: &str, args: &[&str]) {
    hhreg()
        .args(["--db", db_path, "entry", "new"])
        .args(args)
        .assert()
        .success();
}

/// Ledger with one full work day and one vacation day in March 2024
pub fn init_db_with_march(name: &str) -> String {
    let db_path = init_test_db(name);
    entry_new(
        &db_path,
        &["-d", "2024-03-01", "09:00", "12:00", "13:00", "18:00"],
    );
    entry_new(&db_path, &["-y", "vacation", "-j", "trip", "-d", "2024-03-02"]);
    db_path
}

pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}
