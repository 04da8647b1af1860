#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private directory so the user's
/// real configuration is never read or written.
pub fn rsk() -> Command {
    rsk_with_home("rskilltracker_test_home")
}

/// Same as `rsk()` with a dedicated HOME under the temp dir, for tests that
/// write a configuration file.
pub fn rsk_with_home(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(name);
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rskilltracker");
    cmd.env("HOME", &home)
        .env_remove("RUST_LOG")
        .env_remove("EDITOR")
        .env_remove("VISUAL");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rskilltracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn today_str() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Initialize DB and log a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rsk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (skill, hours) in [("Piano", "1.5"), ("Piano", "2"), ("Guitar", "1")] {
        rsk()
            .args(["--db", db_path, "add", skill, hours])
            .assert()
            .success();
    }
}

/// Populate many days of history directly via the library store API
pub fn populate_history(db_path: &str, skill: &str, days: u32) {
    use rskilltracker::store::{ProgressRepository, SqliteStore};

    let mut store = SqliteStore::new(db_path);
    for i in 1..=days {
        let day = chrono::NaiveDate::from_ymd_opt(2025, 11, i).expect("valid day");
        store
            .log_hours_on(skill, f64::from(i) * 0.5, day)
            .expect("log hours");
    }
}
