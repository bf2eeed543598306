//! End-to-end flow tests driving the compiled binary against an
//! isolated data directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gymlog"))
}

fn gymlog(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env("GYMLOG_DATA_DIR", data_dir)
        .env_remove("GYMLOG_DB")
        .args(args)
        .output()
        .expect("binary should run")
}

fn assert_ok(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_fails(output: &Output) -> String {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\nstdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_fresh_install_seeds_starter_content() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let stdout = assert_ok(&gymlog(dir.path(), &["exercise", "list"]));
    assert!(stdout.contains("Bench Press"));
    assert!(stdout.contains("Deadlift"));

    let stdout = assert_ok(&gymlog(dir.path(), &["template", "list"]));
    assert!(stdout.contains("Push Day"));
    assert!(stdout.contains("yes"));
}

#[test]
fn test_draft_to_history_flow() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(
        dir.path(),
        &["workout", "start", "Morning Push", "--date", "2026-08-29"],
    ));
    assert_ok(&gymlog(
        dir.path(),
        &["workout", "add", "Bench Press", "135x5@80"],
    ));
    assert_ok(&gymlog(dir.path(), &["workout", "add", "Bench Press", "135x5"]));
    assert_ok(&gymlog(dir.path(), &["workout", "add", "Push-Up", "20"]));

    let stdout = assert_ok(&gymlog(dir.path(), &["workout", "show"]));
    assert!(stdout.contains("Bench Press"));
    assert!(stdout.contains("135 lbs x 5 @ RPE 80"));

    assert_ok(&gymlog(
        dir.path(),
        &["workout", "finish", "--notes", "felt strong"],
    ));

    let stdout = assert_ok(&gymlog(dir.path(), &["history", "list"]));
    assert!(stdout.contains("Morning Push"));
    assert!(stdout.contains("2026-08-29"));

    // The draft is gone once finished.
    assert_fails(&gymlog(dir.path(), &["workout", "show"]));

    let stdout = assert_ok(&gymlog(dir.path(), &["history", "show", "1"]));
    assert!(stdout.contains("felt strong"));
    assert!(stdout.contains("Push-Up"));

    // Finishing bumped exercise usage.
    let stdout = assert_ok(&gymlog(dir.path(), &["exercise", "list", "--json"]));
    let exercises: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let bench = exercises
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "Bench Press")
        .expect("Bench Press in library");
    assert_eq!(bench["use_count"], 1);
}

#[test]
fn test_start_twice_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["workout", "start"]));
    let stderr = assert_fails(&gymlog(dir.path(), &["workout", "start"]));
    assert!(stderr.contains("already in progress"));

    assert_ok(&gymlog(dir.path(), &["workout", "cancel", "--yes"]));
    assert_ok(&gymlog(dir.path(), &["workout", "start"]));
}

#[test]
fn test_add_requires_library_exercise_and_draft() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let stderr = assert_fails(&gymlog(dir.path(), &["workout", "add", "Bench Press", "135x5"]));
    assert!(stderr.contains("No workout in progress"));

    assert_ok(&gymlog(dir.path(), &["workout", "start"]));
    let stderr = assert_fails(&gymlog(
        dir.path(),
        &["workout", "add", "Underwater Basket Press", "135x5"],
    ));
    assert!(stderr.contains("not in the library"));
}

#[test]
fn test_finish_with_no_sets_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["workout", "start"]));
    let stderr = assert_fails(&gymlog(dir.path(), &["workout", "finish"]));
    assert!(stderr.contains("no sets"));
}

#[test]
fn test_template_start_prefills_draft() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(
        dir.path(),
        &["workout", "start", "--template", "Push Day"],
    ));
    let stdout = assert_ok(&gymlog(dir.path(), &["workout", "show"]));
    assert!(stdout.contains("Push Day"));
    assert!(stdout.contains("Bench Press"));

    assert_ok(&gymlog(dir.path(), &["workout", "cancel", "--yes"]));
}

#[test]
fn test_duplicate_exercise_name_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["exercise", "add", "Sled Push", "legs"]));
    assert_fails(&gymlog(dir.path(), &["exercise", "add", "sled push", "legs"]));
}

#[test]
fn test_starter_template_cannot_be_deleted() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_fails(&gymlog(
        dir.path(),
        &["template", "delete", "Push Day", "--yes"],
    ));

    assert_ok(&gymlog(
        dir.path(),
        &["template", "create", "Custom", "Bench Press", "Squat"],
    ));
    assert_ok(&gymlog(dir.path(), &["template", "delete", "Custom", "--yes"]));
}

#[test]
fn test_export_round_trips_comma_notes() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["workout", "start", "Leg Day"]));
    assert_ok(&gymlog(
        dir.path(),
        &["workout", "add", "Squat", "225x5@85", "--note", "belt, no knee sleeves"],
    ));
    assert_ok(&gymlog(dir.path(), &["workout", "finish"]));

    let stdout = assert_ok(&gymlog(dir.path(), &["export"]));
    assert!(stdout.starts_with("Workout Name,Date,Exercise,Set,Weight,Reps,RPE,Rest,Notes"));
    assert!(stdout.contains("\"belt, no knee sleeves\""));
}

#[test]
fn test_settings_set_and_show() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["settings", "set", "weight-unit", "kg"]));
    assert_ok(&gymlog(dir.path(), &["settings", "set", "default-rest", "120"]));
    let stdout = assert_ok(&gymlog(dir.path(), &["settings", "show"]));
    assert!(stdout.contains("kg"));
    assert!(stdout.contains("120s"));

    // Out-of-range values are rejected and never persisted.
    assert_fails(&gymlog(dir.path(), &["settings", "set", "default-rpe", "101"]));
    let stdout = assert_ok(&gymlog(dir.path(), &["settings", "show"]));
    assert!(!stdout.contains("101"));
}

#[test]
fn test_reset_restores_fresh_install() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["workout", "start"]));
    assert_ok(&gymlog(dir.path(), &["workout", "add", "Plank", "60"]));
    assert_ok(&gymlog(dir.path(), &["workout", "finish"]));
    assert_ok(&gymlog(dir.path(), &["exercise", "add", "Sled Push", "legs"]));

    assert_ok(&gymlog(dir.path(), &["reset", "--yes"]));

    let stdout = assert_ok(&gymlog(dir.path(), &["stats"]));
    assert!(stdout.contains("Workouts"));
    let stdout = assert_ok(&gymlog(dir.path(), &["history", "list", "--json"]));
    let workouts: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(workouts.as_array().unwrap().len(), 0);

    let stdout = assert_ok(&gymlog(dir.path(), &["exercise", "list"]));
    assert!(stdout.contains("Bench Press"));
    assert!(!stdout.contains("Sled Push"));
}

#[test]
fn test_history_edit_and_delete() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_ok(&gymlog(dir.path(), &["workout", "start"]));
    assert_ok(&gymlog(dir.path(), &["workout", "add", "Deadlift", "315x3@90"]));
    assert_ok(&gymlog(dir.path(), &["workout", "finish"]));

    assert_ok(&gymlog(
        dir.path(),
        &["history", "edit", "1", "--name", "Heavy Pulls", "--date", "2026-08-01"],
    ));
    let stdout = assert_ok(&gymlog(dir.path(), &["history", "show", "1"]));
    assert!(stdout.contains("Heavy Pulls"));
    assert!(stdout.contains("2026-08-01"));

    assert_fails(&gymlog(dir.path(), &["history", "edit", "99", "--name", "x"]));

    assert_ok(&gymlog(dir.path(), &["history", "delete", "1", "--yes"]));
    assert_fails(&gymlog(dir.path(), &["history", "show", "1"]));
}

#[test]
fn test_video_link_validation() {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_fails(&gymlog(
        dir.path(),
        &["exercise", "link", "Bench Press", "Form check", "ftp://bad"],
    ));
    assert_ok(&gymlog(
        dir.path(),
        &["exercise", "link", "Bench Press", "Form check", "https://example.com/v"],
    ));

    let stdout = assert_ok(&gymlog(dir.path(), &["exercise", "list", "--json"]));
    assert!(stdout.contains("https://example.com/v"));
}
