//! Corruption recovery tests for the lift binary.
//!
//! These tests verify the system can handle:
//! - Corrupted accumulator, log, tag and profile documents
//! - Log files whose names are not dates
//! - Missing files
//! - Unreadable files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("config.toml"), "").expect("Failed to write config");
    dir
}

fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lift"));
    cmd.arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--today")
        .arg("20240615");
    cmd
}

fn default_profile_dir(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("profiles/default")
}

#[test]
fn test_corrupted_accumulator_starts_fresh() {
    let temp_dir = setup_test_dir();
    let profile_dir = default_profile_dir(&temp_dir);
    fs::create_dir_all(&profile_dir).unwrap();

    let stats_path = profile_dir.join("muscle_stats.json");
    fs::write(&stats_path, "{ invalid json }}}}").expect("Failed to write corrupted stats");

    cli(&temp_dir)
        .args(["today", "--split", "legs", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barbell Squat"));

    // Rewritten as a valid document
    let stats: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&stats_path).unwrap()).expect("Stats should be JSON");
    assert_eq!(stats, serde_json::json!({ "Quads": 1, "Glutes": 1 }));
}

#[test]
fn test_corrupted_day_log_counts_as_empty() {
    let temp_dir = setup_test_dir();
    let logs_dir = default_profile_dir(&temp_dir).join("logs");
    fs::create_dir_all(&logs_dir).unwrap();
    fs::write(logs_dir.join("20240614.json"), "{ not a log").unwrap();

    cli(&temp_dir)
        .args(["log", "--date", "20240613", "--entry", "Leg Press@180:10"])
        .assert()
        .success();

    cli(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("] 10"));

    cli(&temp_dir)
        .args(["show", "--date", "20240614"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No session logged"));
}

#[test]
fn test_non_date_log_names_are_skipped() {
    let temp_dir = setup_test_dir();
    let logs_dir = default_profile_dir(&temp_dir).join("logs");
    fs::create_dir_all(&logs_dir).unwrap();
    fs::write(
        logs_dir.join("best-day-ever.json"),
        r#"{"Leg Press":{"weight":"180","sets":[{"set":1,"reps":99}]}}"#,
    )
    .unwrap();
    fs::write(logs_dir.join("20240230.json"), "{}").unwrap();

    cli(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No logged sets"));
}

#[test]
fn test_missing_data_dir() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("hits")
        .assert()
        .success()
        .stdout(predicate::str::contains("No muscle hits"));

    cli(&temp_dir)
        .args(["summary", "--monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No logged sets"));

    cli(&temp_dir)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cycle tags"));
}

#[test]
fn test_corrupted_cycle_tags_replaced_on_write() {
    let temp_dir = setup_test_dir();
    let profile_dir = default_profile_dir(&temp_dir);
    fs::create_dir_all(&profile_dir).unwrap();
    fs::write(profile_dir.join("cycle_tags.json"), "[1, 2").unwrap();

    cli(&temp_dir)
        .args(["tag", "--label", "Week 3"])
        .assert()
        .success();

    cli(&temp_dir)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 3"));
}

#[test]
fn test_corrupted_adjustments_count_as_none() {
    let temp_dir = setup_test_dir();
    let profile_dir = default_profile_dir(&temp_dir);
    fs::create_dir_all(&profile_dir).unwrap();
    fs::write(profile_dir.join("adjustments.json"), "{\"20240615\": \"sideways\"}").unwrap();

    cli(&temp_dir)
        .args(["log", "--entry", "Leg Press@180:10"])
        .assert()
        .success();

    cli(&temp_dir)
        .args(["summary", "--adjustments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("none    [####################] 1"));
}

#[test]
fn test_corrupted_profile_is_treated_as_absent() {
    let temp_dir = setup_test_dir();
    let profile_dir = temp_dir.path().join("profiles/sam");
    fs::create_dir_all(&profile_dir).unwrap();
    fs::write(profile_dir.join("profile.json"), "garbage").unwrap();

    // Planning falls back to catalog defaults
    cli(&temp_dir)
        .args(["--profile", "sam", "today", "--split", "legs", "--count", "1", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 × 8 @ 135 lbs"));

    cli(&temp_dir)
        .args(["profile", "login", "--name", "sam", "--password", "x"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_dates_rejected() {
    let temp_dir = setup_test_dir();

    Command::new(assert_cmd::cargo::cargo_bin!("lift"))
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--today")
        .arg("2024-06-15")
        .arg("hits")
        .assert()
        .failure();

    cli(&temp_dir)
        .args(["log", "--date", "June 1", "--entry", "Leg Press@180:10"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_profile_name_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["--profile", "../elsewhere", "hits"])
        .assert()
        .failure();
}

#[test]
fn test_permission_denied_accumulator() {
    // Skip on Windows (permission model is different)
    if cfg!(windows) {
        return;
    }

    let temp_dir = setup_test_dir();
    let profile_dir = default_profile_dir(&temp_dir);
    fs::create_dir_all(&profile_dir).unwrap();
    let stats_path = profile_dir.join("muscle_stats.json");
    fs::write(&stats_path, "{}").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&stats_path).unwrap().permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&stats_path, perms).unwrap();

        // Unreadable accumulator is treated as empty
        cli(&temp_dir)
            .args(["today", "--split", "legs", "--dry-run"])
            .assert()
            .success();

        // Clean up permissions for temp dir cleanup
        let mut perms = fs::metadata(&stats_path).unwrap().permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&stats_path, perms).unwrap();
    }
}
