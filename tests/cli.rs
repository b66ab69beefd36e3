use assert_cmd::Command;
use predicates::str::{contains, is_empty};
use std::path::PathBuf;

fn courses_file() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("ListofCourses.csv");
    path
}

// `course_table` with "9" on stdin exits cleanly without touching any file
#[test]
fn cli_exit() {
    Command::cargo_bin("course_table")
        .unwrap()
        .arg("does-not-exist.csv")
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(contains("Menu:"))
        .stdout(contains("Thank you for using this program :)"));
}

// `course_table -V` prints the version
#[test]
fn cli_version() {
    Command::cargo_bin("course_table")
        .unwrap()
        .arg("-V")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

// Load the bundled file, list it, then look up the default key
#[test]
fn cli_load_list_lookup() {
    Command::cargo_bin("course_table")
        .unwrap()
        .arg(courses_file())
        .arg("250")
        .env("RUST_LOG", "off")
        .write_stdin("1\n2\n3\n\n9\n")
        .assert()
        .success()
        .stdout(contains("12 courses loaded, 0 replaced, 0 skipped"))
        .stdout(contains("300, Algorithms and Analysis"))
        .stdout(contains(
            "Title: Data Structures | Description: Lists, stacks, queues, trees and hash tables | Prerequisite: 200",
        ))
        .stderr(is_empty());
}

// Delete a loaded course and confirm it can't be found afterwards
#[test]
fn cli_delete() {
    Command::cargo_bin("course_table")
        .unwrap()
        .arg(courses_file())
        .env("RUST_LOG", "off")
        .write_stdin("1\n4\n400\n3\n400\n4\n400\n9\n")
        .assert()
        .success()
        .stdout(contains("Removed course 400: Theory of Computation"))
        .stdout(contains("The course number 400 was not found."));
}

// A missing file is reported, and the menu carries on
#[test]
fn cli_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    Command::cargo_bin("course_table")
        .unwrap()
        .arg(temp_dir.path().join("missing.csv"))
        .write_stdin("1\n2\n9\n")
        .assert()
        .success()
        .stdout(contains("Could not load"))
        .stdout(contains("No courses loaded."));
}

// A multi-character delimiter is rejected before the menu starts
#[test]
fn cli_invalid_delimiter() {
    Command::cargo_bin("course_table")
        .unwrap()
        .args(&["--delimiter", "::"])
        .write_stdin("9\n")
        .assert()
        .failure()
        .stdout(is_empty());
}

// A course key that isn't a number is rejected before the menu starts
#[test]
fn cli_invalid_course_key() {
    Command::cargo_bin("course_table")
        .unwrap()
        .arg(courses_file())
        .arg("CS250")
        .env("RUST_LOG", "error")
        .write_stdin("9\n")
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("invalid key \"CS250\""));
}
