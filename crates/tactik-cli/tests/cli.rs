//! CLI integration tests. Timetable files live in a temp directory; anchors
//! are always passed explicitly so runs do not depend on the wall clock.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tactik() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("tactik").unwrap();
    cmd
}

fn write_timetable(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("week.txt");
    std::fs::write(&path, content).unwrap();
    path
}

const WEEK: &str = "Math,Physics\nPhysics,Chem\nMath,Physics\n";

#[test]
fn plan_with_all_ratings_via_flags() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, WEEK);

    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0"])
        .args(["--difficulty", "Math=5"])
        .args(["--difficulty", "Physics=3"])
        .args(["--difficulty", "Chem=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Math  score 5"))
        .stdout(predicate::str::contains("2. Physics  score 4"))
        .stdout(predicate::str::contains("3. Chem  score 2"))
        .stdout(predicate::str::contains("[Comfortable]"));
}

#[test]
fn plan_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, WEEK);

    let output = tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0", "--json"])
        .args(["--difficulty", "Math=5"])
        .args(["--difficulty", "Physics=3"])
        .args(["--difficulty", "Chem=1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let ranked: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = ranked.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "Math");
    assert_eq!(rows[0]["score"], 5);
    assert_eq!(rows[0]["forward_count"], 1);
    assert_eq!(rows[0]["backward_count"], 2);
    assert_eq!(rows[0]["tier"], "comfortable");
    assert_eq!(rows[1]["name"], "Physics");
    assert_eq!(rows[2]["name"], "Chem");
}

#[test]
fn plan_prompts_for_missing_ratings() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, WEEK);

    // Math and Chem come from flags; Physics is prompted for
    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0"])
        .args(["--difficulty", "Math=5"])
        .args(["--difficulty", "Chem=1"])
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("upcoming 2, recent 3"))
        .stdout(predicate::str::contains("difficulty for Physics"))
        .stdout(predicate::str::contains("1. Math  score 5"));
}

#[test]
fn plan_missing_file() {
    tactik()
        .args(["plan", "no-such-file.txt", "--anchor", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open timetable"));
}

#[test]
fn plan_empty_file() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, "");

    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timetable is empty"));
}

#[test]
fn plan_anchor_out_of_range() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, WEEK);

    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "anchor day 3 is out of range for a 3-day timetable",
        ));
}

#[test]
fn plan_too_many_distinct_subjects() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, "A,B,C,D,E\nF,G,H,I\n");

    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than 8 distinct subjects"));
}

#[test]
fn plan_rejects_out_of_range_difficulty_flag() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, WEEK);

    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0"])
        .args(["--difficulty", "Math=11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be 1-10"));
}

#[test]
fn plan_rejects_malformed_difficulty_flag() {
    let dir = TempDir::new().unwrap();
    let file = write_timetable(&dir, WEEK);

    tactik()
        .arg("plan")
        .arg(&file)
        .args(["--anchor", "0"])
        .args(["--difficulty", "Math"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=RATING"));
}

#[test]
fn interactive_full_session() {
    // day count, three day lines, then one rating per distinct subject
    // (Math, Physics, Chem) in first-seen order
    tactik()
        .args(["interactive", "--anchor", "0"])
        .write_stdin("3\nMath,Physics\nPhysics,Chem\nMath,Physics\n5\n3\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Math: upcoming 1, recent 2"))
        .stdout(predicate::str::contains("Physics: upcoming 2, recent 3"))
        .stdout(predicate::str::contains("1. Math  score 5"))
        .stdout(predicate::str::contains("3. Chem  score 2"));
}

#[test]
fn interactive_rejects_day_count_out_of_range() {
    tactik()
        .arg("interactive")
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("day count must be between 2 and 7"));
}

#[test]
fn interactive_rejects_non_numeric_day_count() {
    tactik()
        .arg("interactive")
        .write_stdin("three\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("day count is not an integer"));
}

#[test]
fn interactive_aborts_on_bad_rating() {
    tactik()
        .args(["interactive", "--anchor", "0"])
        .write_stdin("2\nMath\nPhysics\nhard\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn about_prints_description() {
    tactik()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("tactik is a study planner"));
}
