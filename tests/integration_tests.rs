use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, populate_history, rsk, rsk_with_home, setup_test_db, today_str};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rsk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    rsk()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("No hours logged yet."));
}

#[test]
fn test_add_merges_same_day_and_shows_summary() {
    let db_path = setup_test_db("cli_add_merge");
    let today = today_str();

    rsk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsk()
        .args(["--db", &db_path, "add", "Piano", "1.5"])
        .assert()
        .success()
        .stdout(contains("Logged 1.50h of Piano"));

    rsk()
        .args(["--db", &db_path, "add", "Piano", "2"])
        .assert()
        .success()
        .stdout(contains("1.50h → 3.50h"))
        .stdout(contains("3.50h"))
        .stdout(contains(today.as_str()));

    rsk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Piano"))
        .stdout(contains("3.50h"));
}

#[test]
fn test_add_second_skill_keeps_first() {
    let db_path = setup_test_db("cli_two_skills");
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Piano"))
        .stdout(contains("3.50h"))
        .stdout(contains("Guitar"))
        .stdout(contains("1.00h"));
}

#[test]
fn test_add_accepts_duration_forms() {
    let db_path = setup_test_db("cli_durations");

    rsk()
        .args(["--db", &db_path, "add", "Coding", "1h30m"])
        .assert()
        .success();

    rsk()
        .args(["--db", &db_path, "add", "Coding", "30m"])
        .assert()
        .success()
        .stdout(contains("2.00h"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_invalid");

    rsk()
        .args(["--db", &db_path, "add", "Piano", "abc"])
        .assert()
        .failure()
        .stderr(contains("not a numeric value"));

    rsk()
        .args(["--db", &db_path, "add", "Piano", "0"])
        .assert()
        .failure()
        .stderr(contains("positive number"));

    rsk()
        .args(["--db", &db_path, "add", "  ", "1"])
        .assert()
        .failure()
        .stderr(contains("non-empty"));

    // nothing was written
    rsk()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("No hours logged yet."));
}

#[test]
fn test_edit_overwrites_record() {
    let db_path = setup_test_db("cli_edit");
    let today = today_str();
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "edit", "Piano", &today, "0.5"])
        .assert()
        .success()
        .stdout(contains("set to 0.50h"))
        .stdout(contains("0.50h"))
        .stdout(contains("Guitar"));

    rsk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("0.50h"))
        .stdout(contains("3.50h").not());
}

#[test]
fn test_edit_accepts_today_keyword() {
    let db_path = setup_test_db("cli_edit_today");
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "edit", "Guitar", "today", "4"])
        .assert()
        .success()
        .stdout(contains("4.00h"));
}

#[test]
fn test_edit_missing_record_fails() {
    let db_path = setup_test_db("cli_edit_missing");
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "edit", "Piano", "2001-01-01", "1"])
        .assert()
        .failure()
        .stderr(contains("No record found for skill 'Piano' on 2001-01-01"));

    rsk()
        .args(["--db", &db_path, "edit", "Piano", "01/01/2001", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_history_chart_per_skill() {
    let db_path = setup_test_db("cli_history");
    populate_history(&db_path, "Piano", 3);
    populate_history(&db_path, "Guitar", 2);

    rsk()
        .args(["--db", &db_path, "history", "--plain", "--width", "6"])
        .assert()
        .success()
        .stdout(contains("Skill: Guitar (1.50h total)"))
        .stdout(contains("Skill: Piano (3.00h total)"))
        .stdout(contains("2025-11-03 | ██████ 1.50h"))
        .stdout(contains("2025-11-01 | ██ 0.50h"));

    rsk()
        .args(["--db", &db_path, "history", "--plain", "--skill", "Guitar"])
        .assert()
        .success()
        .stdout(contains("Skill: Guitar"))
        .stdout(contains("Skill: Piano").not());

    rsk()
        .args(["--db", &db_path, "history", "--skill", "Drums"])
        .assert()
        .success()
        .stdout(contains("No history for skill 'Drums'."));
}

#[test]
fn test_reset_requires_confirmation() {
    let db_path = setup_test_db("cli_reset");
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Reset cancelled"));

    rsk()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Piano"));

    rsk()
        .args(["--db", &db_path, "reset", "--yes"])
        .assert()
        .success();

    rsk()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("No hours logged yet."));
}

#[test]
fn test_fresh_flag_discards_history() {
    let db_path = setup_test_db("cli_fresh");
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "--fresh", "add", "Drawing", "1"])
        .assert()
        .success()
        .stdout(contains("Drawing"))
        .stdout(contains("Piano").not());
}

#[test]
fn test_skills_lists_defaults() {
    rsk()
        .args(["skills"])
        .assert()
        .success()
        .stdout(contains("Piano"))
        .stdout(contains("Guitar"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    rsk()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Records:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("One record per skill and day"));
}

#[test]
fn test_db_check_reports_duplicates() {
    let db_path = setup_test_db("cli_db_dups");
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    rskilltracker::db::initialize::init_db(&conn).unwrap();
    conn.execute_batch(
        "INSERT INTO progress VALUES ('Piano', 1.0, '2025-10-01');
         INSERT INTO progress VALUES ('Piano', 2.0, '2025-10-01');",
    )
    .unwrap();
    drop(conn);

    rsk()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Duplicate records"))
        .stdout(contains("Piano 2025-10-01 ×2"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_creates_and_validates_file() {
    let home = std::env::temp_dir().join("rskilltracker_config_edit_home");
    std::fs::remove_dir_all(&home).ok();

    rsk_with_home("rskilltracker_config_edit_home")
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("Configuration saved: 5 skills"));

    let conf = home.join(".rskilltracker").join("rskilltracker.conf");
    let content = std::fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("restrict_skills: false"));

    rsk_with_home("rskilltracker_config_edit_home")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("chart_width: 40"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_reports_broken_file() {
    let home = std::env::temp_dir().join("rskilltracker_config_broken_home");
    std::fs::remove_dir_all(&home).ok();

    // `false` exits non-zero: nothing is validated and the command fails.
    rsk_with_home("rskilltracker_config_broken_home")
        .args(["config", "--edit", "--editor", "false"])
        .assert()
        .failure()
        .stderr(contains("exited with"));

    let conf = home.join(".rskilltracker").join("rskilltracker.conf");
    std::fs::write(&conf, "skills: [unterminated\n").unwrap();

    rsk_with_home("rskilltracker_config_broken_home")
        .args(["skills"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
